use url::Url;

use crate::Result;

pub const SHARE_WINDOW_FEATURES: &str = "width=600,height=400";
pub const TOAST_DURATION_MS: u64 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Facebook,
    Twitter,
    Instagram,
}

impl SharePlatform {
    /// Parse the value of a `data-share` attribute
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "facebook" => Some(SharePlatform::Facebook),
            "twitter" => Some(SharePlatform::Twitter),
            "instagram" => Some(SharePlatform::Instagram),
            _ => None,
        }
    }
}

/// What a share link click should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// Open a popup window
    OpenWindow { url: Url, features: &'static str },
    /// Copy text to the clipboard, then show a toast for a while
    CopyToClipboard {
        text: String,
        toast: String,
        toast_ms: u64,
    },
}

pub fn share_action(
    platform: SharePlatform,
    page_url: &str,
    share_text: &str,
    toast: &str,
) -> Result<ShareAction> {
    let encoded = urlencoding::encode(page_url);

    let action = match platform {
        SharePlatform::Facebook => ShareAction::OpenWindow {
            url: Url::parse(&format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                encoded
            ))?,
            features: SHARE_WINDOW_FEATURES,
        },
        SharePlatform::Twitter => ShareAction::OpenWindow {
            url: Url::parse(&format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                encoded,
                urlencoding::encode(share_text)
            ))?,
            features: SHARE_WINDOW_FEATURES,
        },
        SharePlatform::Instagram => ShareAction::CopyToClipboard {
            text: page_url.to_string(),
            toast: toast.to_string(),
            toast_ms: TOAST_DURATION_MS,
        },
    };

    Ok(action)
}
