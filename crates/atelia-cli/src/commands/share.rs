use anyhow::{bail, Result};

use atelia_core::compose::{share_action, ShareAction, SharePlatform};
use atelia_core::AppConfig;

pub fn run(config: &AppConfig, platform: &str, page_url: &str, json: bool) -> Result<()> {
    let Some(platform) = SharePlatform::from_attr(platform) else {
        bail!("Unknown share platform: {}", platform);
    };

    let action = share_action(
        platform,
        page_url,
        &config.contact.share_text,
        &config.contact.share_toast,
    )?;

    match action {
        ShareAction::OpenWindow { url, features } => {
            if json {
                let out = serde_json::json!({
                    "action": "open_window",
                    "url": url.as_str(),
                    "features": features,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Open window ({}): {}", features, url);
            }
        }
        ShareAction::CopyToClipboard {
            text,
            toast,
            toast_ms,
        } => {
            if json {
                let out = serde_json::json!({
                    "action": "copy_to_clipboard",
                    "text": text,
                    "toast": toast,
                    "toast_ms": toast_ms,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Copy to clipboard: {}", text);
                println!("Toast for {} ms: {}", toast_ms, toast);
            }
        }
    }

    Ok(())
}
