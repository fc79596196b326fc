use serde::{Deserialize, Serialize};
use tracing::warn;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub navbar: NavbarConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub back_to_top: BackToTopConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Easing curve applied to scroll progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    /// Ease-in cubic: t³
    #[default]
    CubicIn,
}

/// Duration policy for one call site of the smooth-scroll animator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollProfile {
    /// Duration used when the caller does not request one
    pub default_duration_ms: u64,
    /// Floor applied to every effective duration
    pub min_duration_ms: u64,
    /// Duration requested by link clicks
    pub click_duration_ms: u64,
}

impl ScrollProfile {
    pub fn anchor() -> Self {
        Self {
            default_duration_ms: 780,
            min_duration_ms: 220,
            click_duration_ms: 820,
        }
    }

    pub fn card() -> Self {
        Self {
            default_duration_ms: 700,
            min_duration_ms: 200,
            click_duration_ms: 720,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scrolling; false behaves like prefers-reduced-motion
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default)]
    pub easing: EasingType,
    /// Distances below this are applied without animating
    #[serde(default = "default_epsilon_px")]
    pub epsilon_px: f64,
    /// Frame rate used when replaying animations headlessly
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Extra space kept between the navbar and a scrolled-to anchor
    #[serde(default = "default_navbar_clearance")]
    pub navbar_clearance_px: f64,
    #[serde(default = "ScrollProfile::anchor")]
    pub anchor: ScrollProfile,
    #[serde(default = "ScrollProfile::card")]
    pub card: ScrollProfile,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            easing: EasingType::default(),
            epsilon_px: default_epsilon_px(),
            animation_fps: default_animation_fps(),
            navbar_clearance_px: default_navbar_clearance(),
            anchor: ScrollProfile::anchor(),
            card: ScrollProfile::card(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavbarConfig {
    /// Offsets at or above this line always show the navbar
    #[serde(default = "default_near_top")]
    pub near_top_px: f64,
    /// Minimum scroll delta that may change visibility
    #[serde(default = "default_hysteresis")]
    pub hysteresis_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            near_top_px: default_near_top(),
            hysteresis_px: default_hysteresis(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Element id of the sliding grid, matched against transition-end targets
    #[serde(default = "default_grid_id")]
    pub grid_id: String,
    /// Number of slots shown at once
    #[serde(default = "default_visible")]
    pub visible: usize,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    #[serde(default = "default_transition_easing")]
    pub transition_easing: String,
    /// Directory that relative sources resolve against when decoding from disk
    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,
    /// Circular image sequence, first entry is index 1
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            grid_id: default_grid_id(),
            visible: default_visible(),
            transition_ms: default_transition_ms(),
            transition_easing: default_transition_easing(),
            image_dir: default_image_dir(),
            sources: default_sources(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_contact_email")]
    pub email: String,
    #[serde(default = "default_fiverr_url")]
    pub fiverr_url: String,
    /// Text attached to twitter shares
    #[serde(default = "default_share_text")]
    pub share_text: String,
    /// Toast shown after the page link is copied
    #[serde(default = "default_share_toast")]
    pub share_toast: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: default_contact_email(),
            fiverr_url: default_fiverr_url(),
            share_text: default_share_text(),
            share_toast: default_share_toast(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackToTopConfig {
    #[serde(default = "default_back_to_top_threshold")]
    pub threshold_px: f64,
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self {
            threshold_px: default_back_to_top_threshold(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_epsilon_px() -> f64 {
    2.0
}

fn default_animation_fps() -> u32 {
    60
}

fn default_navbar_clearance() -> f64 {
    12.0
}

fn default_near_top() -> f64 {
    20.0
}

fn default_hysteresis() -> f64 {
    8.0
}

fn default_grid_id() -> String {
    "interior-furniture-grid".to_string()
}

fn default_visible() -> usize {
    4
}

fn default_transition_ms() -> u64 {
    520
}

fn default_transition_easing() -> String {
    "cubic-bezier(0.22, 1, 0.36, 1)".to_string()
}

fn default_image_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_sources() -> Vec<String> {
    (1..=7)
        .map(|n| {
            let ext = if n == 5 { "png" } else { "jpg" };
            format!("image/3-interior-6-{}.{}", n, ext)
        })
        .collect()
}

fn default_contact_email() -> String {
    "allenwang.awdesign@gmail.com".to_string()
}

fn default_fiverr_url() -> String {
    "https://www.fiverr.com/archi_dwell".to_string()
}

fn default_share_text() -> String {
    "Check out Spatial Atélia — elite design & visualization".to_string()
}

fn default_share_toast() -> String {
    "Link copied! Paste it on Instagram.".to_string()
}

fn default_back_to_top_threshold() -> f64 {
    600.0
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit file, defaults when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/atelia/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("atelia")
            .join("config.toml")
    }

    fn validate(&self) -> crate::Result<()> {
        if self.scroll.animation_fps == 0 {
            warn!("scroll.animation_fps is 0, frames fall back to 16ms");
        }
        if self.carousel.visible == 0 {
            return Err(crate::Error::Config(
                "carousel.visible must be at least 1".to_string(),
            ));
        }
        if self.navbar.hysteresis_px < 0.0 || !self.navbar.hysteresis_px.is_finite() {
            return Err(crate::Error::Config(format!(
                "navbar.hysteresis_px must be a non-negative number, got {}",
                self.navbar.hysteresis_px
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_site_constants() {
        let config = AppConfig::default();
        assert_eq!(config.scroll.easing, EasingType::CubicIn);
        assert_eq!(config.scroll.anchor.default_duration_ms, 780);
        assert_eq!(config.scroll.anchor.min_duration_ms, 220);
        assert_eq!(config.scroll.card.default_duration_ms, 700);
        assert_eq!(config.scroll.card.min_duration_ms, 200);
        assert_eq!(config.navbar.near_top_px, 20.0);
        assert_eq!(config.navbar.hysteresis_px, 8.0);
        assert_eq!(config.carousel.sources.len(), 7);
        assert_eq!(config.carousel.sources[4], "image/3-interior-6-5.png");
        assert_eq!(config.carousel.sources[0], "image/3-interior-6-1.jpg");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [scroll]
            smooth_enabled = false
            easing = "linear"

            [navbar]
            hysteresis_px = 12.0
            "#,
        )
        .unwrap();

        assert!(!config.scroll.smooth_enabled);
        assert_eq!(config.scroll.easing, EasingType::Linear);
        assert_eq!(config.scroll.epsilon_px, 2.0);
        assert_eq!(config.navbar.hysteresis_px, 12.0);
        assert_eq!(config.navbar.near_top_px, 20.0);
        assert_eq!(config.carousel.visible, 4);
    }

    #[test]
    fn test_zero_visible_slots_rejected() {
        let err = AppConfig::from_toml("[carousel]\nvisible = 0\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/atelia/config.toml")).unwrap();
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_toml_roundtrip_preserves_profiles() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.scroll.card, ScrollProfile::card());
    }
}
