use crate::normalize::normalize;
use crate::options::ShowLocationOptions;

use super::*;

fn url_for(options: &ShowLocationOptions, platform: Platform, app: MapApp) -> String {
    let (request, prefixes) = normalize(options, platform).unwrap();
    build_url(app, &request, &prefixes).unwrap()
}

fn dest() -> ShowLocationOptions {
    ShowLocationOptions::destination(40.7, -74.0)
}

fn routed() -> ShowLocationOptions {
    ShowLocationOptions::destination(1.0, 2.0).with_source(3.0, 4.0)
}

#[test]
fn encode_component_matches_encode_uri_component() {
    assert_eq!(encode_component("Café & Co"), "Caf%C3%A9%20%26%20Co");
    assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
    assert_eq!(encode_component("x/y?z=1#"), "x%2Fy%3Fz%3D1%23");
}

#[test]
fn apple_maps_without_title_uses_location_placeholder() {
    assert_eq!(
        url_for(&dest(), Platform::Ios, MapApp::AppleMaps),
        "maps://?ll=40.7,-74&q=Location"
    );
}

#[test]
fn apple_maps_with_source_and_title() {
    let options = routed().with_title("Home");
    assert_eq!(
        url_for(&options, Platform::Android, MapApp::AppleMaps),
        "http://maps.apple.com/?saddr=3,4&daddr=1,2&q=Home&address=Home"
    );
}

#[test]
fn google_maps_on_ios_adds_api_flag() {
    assert_eq!(
        url_for(&dest(), Platform::Ios, MapApp::GoogleMaps),
        "comgooglemaps://?q=40.7,-74&api=1&ll=40.7,-74"
    );
}

#[test]
fn google_maps_on_android_omits_api_flag() {
    assert_eq!(
        url_for(&dest(), Platform::Android, MapApp::GoogleMaps),
        "https://maps.google.com/?q=40.7,-74&ll=40.7,-74"
    );
}

#[test]
fn google_maps_force_lat_lon_pins_title() {
    let options = ShowLocationOptions {
        google_force_lat_lon: true,
        ..dest().with_title("Pier 17")
    };
    assert_eq!(
        url_for(&options, Platform::Android, MapApp::GoogleMaps),
        "https://maps.google.com/?q=loc:40.7,+-74+(Pier%2017)&ll=40.7,-74"
    );
}

#[test]
fn google_maps_force_lat_lon_without_title_falls_back_to_coordinates() {
    let options = ShowLocationOptions {
        google_force_lat_lon: true,
        ..dest()
    };
    assert_eq!(
        url_for(&options, Platform::Android, MapApp::GoogleMaps),
        "https://maps.google.com/?q=40.7,-74&ll=40.7,-74"
    );
}

#[test]
fn google_maps_with_place_id_and_source() {
    let options = ShowLocationOptions {
        google_place_id: Some("ChIJN1t_tDeuEmsR".to_string()),
        ..routed().with_title("Office")
    };
    assert_eq!(
        url_for(&options, Platform::Ios, MapApp::GoogleMaps),
        "comgooglemaps://?q=Office&api=1&query_place_id=ChIJN1t_tDeuEmsR&saddr=3,4&daddr=1,2"
    );
}

#[test]
fn baidu_maps_routes_from_source() {
    assert_eq!(
        url_for(&routed(), Platform::Ios, MapApp::BaiduMaps),
        "baidumap://map/direction?origin=latlng:3,4+|name:origin&destination=latlng:1,2|name:destination&mode=driving&region=none&output=html&src=webapp.baidu.openAPIdemo"
    );
}

#[test]
fn baidu_maps_without_source_omits_origin() {
    let url = url_for(&dest(), Platform::Ios, MapApp::BaiduMaps);
    assert!(url.starts_with("baidumap://map/direction?destination=latlng:40.7,-74|"));
    assert!(!url.contains("origin"));
}

#[test]
fn citymapper_with_title_and_source() {
    assert_eq!(
        url_for(&routed().with_title("Gym"), Platform::Ios, MapApp::Citymapper),
        "citymapper://directions?endcoord=1,2&endname=Gym&startcoord=3,4"
    );
}

#[test]
fn uber_without_source_picks_up_at_current_location() {
    assert_eq!(
        url_for(&dest(), Platform::Ios, MapApp::Uber),
        "uber://?action=setPickup&dropoff[latitude]=40.7&dropoff[longitude]=-74&pickup=my_location"
    );
}

#[test]
fn uber_with_source_sets_pickup_coordinates() {
    let url = url_for(&routed(), Platform::Ios, MapApp::Uber);
    assert!(url.contains("dropoff[latitude]=1&dropoff[longitude]=2"));
    assert!(url.contains("pickup[latitude]=3&pickup[longitude]=4"));
    assert!(!url.contains("pickup=my_location"));
}

#[test]
fn uber_with_title_sets_nickname() {
    let url = url_for(&dest().with_title("JFK T4"), Platform::Ios, MapApp::Uber);
    assert!(url.contains("&dropoff[nickname]=JFK%20T4&"));
}

#[test]
fn lyft_ignores_title() {
    assert_eq!(
        url_for(&routed().with_title("Home"), Platform::Ios, MapApp::Lyft),
        "lyft://ridetype?id=lyft&destination[latitude]=1&destination[longitude]=2&pickup[latitude]=3&pickup[longitude]=4"
    );
}

#[test]
fn transit_with_and_without_source() {
    assert_eq!(
        url_for(&dest(), Platform::Ios, MapApp::Transit),
        "transit://directions?to=40.7,-74"
    );
    assert_eq!(
        url_for(&routed(), Platform::Ios, MapApp::Transit),
        "transit://directions?to=1,2&from=3,4"
    );
}

#[test]
fn truckmap_place_and_route() {
    assert_eq!(
        url_for(&dest(), Platform::Ios, MapApp::Truckmap),
        "http://truckmap.com/place/40.7,-74"
    );
    assert_eq!(
        url_for(&routed(), Platform::Android, MapApp::Truckmap),
        "http://truckmap.com/route/3,4/1,2"
    );
}

#[test]
fn waze_without_title_has_no_query() {
    assert_eq!(
        url_for(&dest(), Platform::Ios, MapApp::Waze),
        "waze://?ll=40.7,-74&navigate=yes"
    );
}

#[test]
fn waze_with_title() {
    assert_eq!(
        url_for(&dest().with_title("Café & Co"), Platform::Ios, MapApp::Waze),
        "waze://?ll=40.7,-74&navigate=yes&q=Caf%C3%A9%20%26%20Co"
    );
}

#[test]
fn yandex_navigator_route() {
    assert_eq!(
        url_for(&routed(), Platform::Ios, MapApp::Yandex),
        "yandexnavi://build_route_on_map?lat_to=1&lon_to=2&lat_from=3&lon_from=4"
    );
}

#[test]
fn yandex_maps_puts_longitude_first() {
    assert_eq!(
        url_for(&routed(), Platform::Ios, MapApp::YandexMaps),
        "yandexmaps://maps.yandex.ru/?pt=2,1"
    );
}

#[test]
fn moovit_with_title_and_source() {
    assert_eq!(
        url_for(&routed().with_title("Stop"), Platform::Ios, MapApp::Moovit),
        "moovit://directions?dest_lat=1&dest_lon=2&dest_name=Stop&orig_lat=3&orig_lon=4"
    );
}

#[test]
fn kakaomap_look_and_route() {
    assert_eq!(
        url_for(&dest(), Platform::Ios, MapApp::Kakaomap),
        "kakaomap://look?p=40.7,-74"
    );
    assert_eq!(
        url_for(&routed(), Platform::Ios, MapApp::Kakaomap),
        "kakaomap://route?sp=3,4&ep=1,2&by=CAR"
    );
}

#[test]
fn build_url_returns_none_for_app_missing_from_prefixes() {
    let (request, prefixes) = normalize(&dest(), Platform::Ios).unwrap();
    let prefixes = prefixes.retain(&[MapApp::Waze]);
    assert!(build_url(MapApp::Uber, &request, &prefixes).is_none());
    assert!(build_url(MapApp::Waze, &request, &prefixes).is_some());
}
