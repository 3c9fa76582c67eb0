//! Deep-link templates.
//!
//! Each app maps to a pure template over [`UrlParts`]. Adding an app means a
//! new [`MapApp`] variant, a prefix, a default title, and an arm in
//! [`template_for`].

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::apps::MapApp;
use crate::coordinate::Coordinate;
use crate::normalize::LocationRequest;
use crate::platform::Platform;
use crate::prefixes::PrefixTable;

/// Characters left alone by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Pre-formatted inputs shared by every template.
#[derive(Debug, Clone)]
pub struct UrlParts<'a> {
    pub prefix: &'a str,
    pub platform: Platform,
    pub destination: Coordinate,
    pub source: Option<Coordinate>,
    /// Percent-encoded once; `None` when the request has no title.
    pub encoded_title: Option<String>,
    pub google_force_lat_lon: bool,
    pub google_place_id: Option<String>,
}

pub type Template = fn(&UrlParts<'_>) -> String;

/// Percent-encode a URL component the way `encodeURIComponent` does.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Build the deep link for `app`, or `None` when `prefixes` has no entry
/// for it.
#[must_use]
pub fn build_url(app: MapApp, request: &LocationRequest, prefixes: &PrefixTable) -> Option<String> {
    let prefix = prefixes.get(app)?;
    let parts = UrlParts {
        prefix,
        platform: request.platform,
        destination: request.destination,
        source: request.source,
        encoded_title: request.title.as_deref().map(encode_component),
        google_force_lat_lon: request.google_force_lat_lon,
        google_place_id: request.google_place_id.as_deref().map(encode_component),
    };
    let url = template_for(app)(&parts);
    tracing::debug!(%app, %url, "built deep link");
    Some(url)
}

#[must_use]
pub fn template_for(app: MapApp) -> Template {
    match app {
        MapApp::AppleMaps => apple_maps,
        MapApp::GoogleMaps => google_maps,
        MapApp::BaiduMaps => baidu_maps,
        MapApp::Citymapper => citymapper,
        MapApp::Uber => uber,
        MapApp::Lyft => lyft,
        MapApp::Transit => transit,
        MapApp::Truckmap => truckmap,
        MapApp::Waze => waze,
        MapApp::Yandex => yandex,
        MapApp::YandexMaps => yandex_maps,
        MapApp::Moovit => moovit,
        MapApp::Kakaomap => kakaomap,
    }
}

fn apple_maps(p: &UrlParts<'_>) -> String {
    let mut url = match p.source {
        Some(source) => format!("{}?saddr={source}&daddr={}", p.prefix, p.destination),
        None => format!("{}?ll={}", p.prefix, p.destination),
    };
    match &p.encoded_title {
        Some(title) => url.push_str(&format!("&q={title}&address={title}")),
        None => url.push_str("&q=Location"),
    }
    url
}

fn google_maps(p: &UrlParts<'_>) -> String {
    let dest = p.destination;
    let mut url = match &p.encoded_title {
        Some(title) if p.google_force_lat_lon => format!(
            "{}?q=loc:{},+{}+({title})",
            p.prefix, dest.latitude, dest.longitude
        ),
        Some(title) => format!("{}?q={title}", p.prefix),
        None => format!("{}?q={dest}", p.prefix),
    };
    if p.platform == Platform::Ios {
        url.push_str("&api=1");
    }
    if let Some(place_id) = &p.google_place_id {
        url.push_str(&format!("&query_place_id={place_id}"));
    }
    match p.source {
        Some(source) => url.push_str(&format!("&saddr={source}&daddr={dest}")),
        None => url.push_str(&format!("&ll={dest}")),
    }
    url
}

fn baidu_maps(p: &UrlParts<'_>) -> String {
    let mut url = format!("{}direction?", p.prefix);
    // Without an origin Baidu routes from the current location.
    if let Some(source) = p.source {
        url.push_str(&format!("origin=latlng:{source}+|name:origin&"));
    }
    url.push_str(&format!(
        "destination=latlng:{}|name:destination&mode=driving&region=none&output=html&src=webapp.baidu.openAPIdemo",
        p.destination
    ));
    url
}

fn citymapper(p: &UrlParts<'_>) -> String {
    let mut url = format!("{}directions?endcoord={}", p.prefix, p.destination);
    if let Some(title) = &p.encoded_title {
        url.push_str(&format!("&endname={title}"));
    }
    if let Some(source) = p.source {
        url.push_str(&format!("&startcoord={source}"));
    }
    url
}

fn uber(p: &UrlParts<'_>) -> String {
    let mut url = format!(
        "{}?action=setPickup&dropoff[latitude]={}&dropoff[longitude]={}",
        p.prefix, p.destination.latitude, p.destination.longitude
    );
    if let Some(title) = &p.encoded_title {
        url.push_str(&format!("&dropoff[nickname]={title}"));
    }
    match p.source {
        Some(source) => url.push_str(&format!(
            "&pickup[latitude]={}&pickup[longitude]={}",
            source.latitude, source.longitude
        )),
        None => url.push_str("&pickup=my_location"),
    }
    url
}

fn lyft(p: &UrlParts<'_>) -> String {
    let mut url = format!(
        "{}ridetype?id=lyft&destination[latitude]={}&destination[longitude]={}",
        p.prefix, p.destination.latitude, p.destination.longitude
    );
    if let Some(source) = p.source {
        url.push_str(&format!(
            "&pickup[latitude]={}&pickup[longitude]={}",
            source.latitude, source.longitude
        ));
    }
    url
}

fn transit(p: &UrlParts<'_>) -> String {
    let mut url = format!("{}directions?to={}", p.prefix, p.destination);
    if let Some(source) = p.source {
        url.push_str(&format!("&from={source}"));
    }
    url
}

fn truckmap(p: &UrlParts<'_>) -> String {
    match p.source {
        Some(source) => format!("{}route/{source}/{}", p.prefix, p.destination),
        None => format!("{}place/{}", p.prefix, p.destination),
    }
}

fn waze(p: &UrlParts<'_>) -> String {
    let mut url = format!("{}?ll={}&navigate=yes", p.prefix, p.destination);
    if let Some(title) = &p.encoded_title {
        url.push_str(&format!("&q={title}"));
    }
    url
}

fn yandex(p: &UrlParts<'_>) -> String {
    let mut url = format!(
        "{}build_route_on_map?lat_to={}&lon_to={}",
        p.prefix, p.destination.latitude, p.destination.longitude
    );
    if let Some(source) = p.source {
        url.push_str(&format!(
            "&lat_from={}&lon_from={}",
            source.latitude, source.longitude
        ));
    }
    url
}

fn yandex_maps(p: &UrlParts<'_>) -> String {
    format!(
        "{}?pt={},{}",
        p.prefix, p.destination.longitude, p.destination.latitude
    )
}

fn moovit(p: &UrlParts<'_>) -> String {
    let mut url = format!(
        "{}directions?dest_lat={}&dest_lon={}",
        p.prefix, p.destination.latitude, p.destination.longitude
    );
    if let Some(title) = &p.encoded_title {
        url.push_str(&format!("&dest_name={title}"));
    }
    if let Some(source) = p.source {
        url.push_str(&format!(
            "&orig_lat={}&orig_lon={}",
            source.latitude, source.longitude
        ));
    }
    url
}

fn kakaomap(p: &UrlParts<'_>) -> String {
    match p.source {
        Some(source) => format!("{}route?sp={source}&ep={}&by=CAR", p.prefix, p.destination),
        None => format!("{}look?p={}", p.prefix, p.destination),
    }
}

#[cfg(test)]
#[path = "url_test.rs"]
mod tests;
