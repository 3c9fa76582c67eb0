//! [`UrlOpener`] that shells out to the host's URL handler.

use async_trait::async_trait;
use maplink_core::{LaunchError, UrlOpener};
use tokio::process::Command;

/// Where deep links are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum LaunchTarget {
    /// This machine's default handler (`open`, `xdg-open`, `url.dll`).
    Desktop,
    /// The booted iOS simulator, via `xcrun simctl openurl`.
    IosSimulator,
    /// The connected Android device, via `adb shell am start`.
    AndroidDevice,
}

pub(crate) struct SystemOpener {
    target: LaunchTarget,
}

impl SystemOpener {
    pub(crate) fn new(target: LaunchTarget) -> Self {
        Self { target }
    }

    fn open_command(&self, url: &str) -> Command {
        match self.target {
            LaunchTarget::Desktop => desktop_command(url),
            LaunchTarget::IosSimulator => {
                let mut cmd = Command::new("xcrun");
                cmd.args(["simctl", "openurl", "booted", url]);
                cmd
            }
            LaunchTarget::AndroidDevice => {
                // `adb shell` re-parses its arguments on the device.
                let mut cmd = Command::new("adb");
                cmd.args([
                    "shell",
                    "am",
                    "start",
                    "-W",
                    "-a",
                    "android.intent.action.VIEW",
                    "-d",
                    shell_quote(url).as_str(),
                ]);
                cmd
            }
        }
    }
}

#[async_trait]
impl UrlOpener for SystemOpener {
    async fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        let output = self
            .open_command(url)
            .output()
            .await
            .map_err(|source| LaunchError::Spawn {
                url: url.to_string(),
                source,
            })?;

        if output.status.success() {
            // `am start` exits 0 even when no activity resolves the intent.
            let stdout = String::from_utf8_lossy(&output.stdout);
            if self.target == LaunchTarget::AndroidDevice && stdout.contains("Error:") {
                return Err(LaunchError::NoHandler {
                    url: url.to_string(),
                });
            }
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::debug!(url, status = %output.status, %stderr, "opener exited unsuccessfully");
        if stderr.is_empty() {
            Err(LaunchError::NoHandler {
                url: url.to_string(),
            })
        } else {
            Err(LaunchError::Failed {
                url: url.to_string(),
                reason: stderr,
            })
        }
    }

    async fn can_open_url(&self, url: &str) -> Result<bool, LaunchError> {
        let Some((scheme, _)) = url.split_once("://") else {
            return Ok(false);
        };
        if matches!(scheme, "http" | "https") {
            return Ok(true);
        }
        match self.target {
            LaunchTarget::Desktop if cfg!(target_os = "linux") => {
                xdg_has_scheme_handler(scheme).await
            }
            // No cheap query on the other targets; offer every app.
            _ => Ok(true),
        }
    }
}

fn desktop_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        // `cmd /C start` would split the URL at `&` and expand `%VAR%`.
        let mut cmd = Command::new("rundll32");
        cmd.args(["url.dll,FileProtocolHandler", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

async fn xdg_has_scheme_handler(scheme: &str) -> Result<bool, LaunchError> {
    let mime = format!("x-scheme-handler/{scheme}");
    let output = Command::new("xdg-mime")
        .args(["query", "default", mime.as_str()])
        .output()
        .await
        .map_err(|source| LaunchError::Spawn {
            url: format!("{scheme}://"),
            source,
        })?;
    Ok(output.status.success() && !output.stdout.trim_ascii().is_empty())
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
