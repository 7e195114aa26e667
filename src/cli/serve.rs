use std::time::Duration;

use anyhow::Result;
use tokio::process::Command;

use crate::api;
use crate::core::AppConfig;

const BROWSER_DELAY: Duration = Duration::from_millis(1500);

fn browser_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Opens the local page in the default browser once the server has
/// had a moment to start. Failing to open it is not an error.
fn spawn_browser(url: String) {
    tokio::spawn(async move {
        tokio::time::sleep(BROWSER_DELAY).await;
        match browser_command(&url).status().await {
            Ok(status) if status.success() => tracing::debug!("Opened {} in browser", url),
            Ok(status) => tracing::warn!("Browser opener exited with {}", status),
            Err(e) => tracing::warn!("Unable to open browser: {}", e),
        }
    });
}

/// Loads `.env` into the process environment. A missing file is fine,
/// the process env still applies.
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded env from {}", path.display());
    }
}

pub async fn run(host: String, port: String, open_browser: bool) -> Result<()> {
    api::init_tracing();
    load_dotenv();
    let config = AppConfig::default();

    if open_browser {
        spawn_browser(format!("http://{}:{}", host, port));
    }

    api::serve(host, port, config).await
}
