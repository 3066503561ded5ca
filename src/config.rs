use log::{warn, Level};
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` block that
/// overrides the built-in defaults.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logging while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub header: HeaderConfig,
    pub hero: HeroConfig,
    pub cursor: CursorConfig,
    pub banner: BannerConfig,
    pub reveal: RevealConfig,
    pub counter: CounterConfig,
    pub contact: ContactConfig,
}

/// A viewport narrower than `below_px` shows `visible` cards.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub below_px: f64,
    pub visible: usize,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    pub gap_px: f64,
    pub swipe_threshold_px: f64,
    pub autoplay_interval_ms: u32,
    /// Checked in ascending `below_px` order.
    pub breakpoints: Vec<Breakpoint>,
    pub widest_visible: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            gap_px: 20.0,
            swipe_threshold_px: 40.0,
            autoplay_interval_ms: 5000,
            breakpoints: vec![
                Breakpoint { below_px: 600.0, visible: 1 },
                Breakpoint { below_px: 1024.0, visible: 2 },
            ],
            widest_visible: 3,
        }
    }
}

impl CarouselConfig {
    /// How many cards fit side by side at the given viewport width.
    /// Never less than one.
    pub fn visible_count(&self, viewport_width: f64) -> usize {
        let mut tiers = self.breakpoints.clone();
        tiers.sort_by(|a, b| a.below_px.total_cmp(&b.below_px));
        tiers
            .iter()
            .find(|tier| viewport_width < tier.below_px)
            .map(|tier| tier.visible)
            .unwrap_or(self.widest_visible)
            .max(1)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct HeaderConfig {
    pub scrolled_after_px: f64,
    /// Space left above a section when scrolling to it, so the sticky
    /// header doesn't cover the heading.
    pub scroll_offset_px: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scrolled_after_px: 50.0,
            scroll_offset_px: 80.0,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct HeroConfig {
    pub parallax_factor: f64,
    /// Largest background shift the pointer can cause, each way.
    pub tilt_x_px: f64,
    pub tilt_y_px: f64,
    /// Viewports this narrow count as touch devices: no tilt, no cursor.
    pub touch_max_width_px: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            parallax_factor: 0.35,
            tilt_x_px: 18.0,
            tilt_y_px: 12.0,
            touch_max_width_px: 768.0,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CursorConfig {
    /// Fraction of the remaining distance the ring closes each frame.
    pub ring_lerp: f64,
    pub trail_points: usize,
    /// Pointer travel needed before a new trail point is laid down.
    pub trail_spacing_px: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            ring_lerp: 0.1,
            trail_points: 28,
            trail_spacing_px: 6.0,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BannerConfig {
    /// Background travel either side of centre.
    pub travel_px: f64,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self { travel_px: 60.0 }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    /// Negative bottom margin so elements reveal a little after entering.
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.12,
            root_margin: "0px 0px -40px 0px".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u32,
    pub frame_ms: u32,
    /// Counters wait until most of the number is on screen.
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1600,
            frame_ms: 16,
            threshold: 0.6,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    pub sending_ms: u32,
    pub feedback_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            sending_ms: 800,
            feedback_ms: 3500,
        }
    }
}

/// Parses an override block. Anything left out keeps its default.
pub fn parse(json: &str) -> Result<SiteConfig, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads the embedded config block, falling back to defaults when it is
/// missing or malformed.
pub fn load() -> SiteConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(raw) = raw else {
        return SiteConfig::default();
    };

    match parse(&raw) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_count_follows_default_tiers() {
        let config = CarouselConfig::default();
        assert_eq!(config.visible_count(320.0), 1);
        assert_eq!(config.visible_count(599.9), 1);
        assert_eq!(config.visible_count(600.0), 2);
        assert_eq!(config.visible_count(1023.0), 2);
        assert_eq!(config.visible_count(1024.0), 3);
        assert_eq!(config.visible_count(2560.0), 3);
    }

    #[test]
    fn visible_count_sorts_unordered_breakpoints() {
        let config = CarouselConfig {
            breakpoints: vec![
                Breakpoint { below_px: 1200.0, visible: 3 },
                Breakpoint { below_px: 500.0, visible: 1 },
            ],
            widest_visible: 4,
            ..CarouselConfig::default()
        };
        assert_eq!(config.visible_count(400.0), 1);
        assert_eq!(config.visible_count(800.0), 3);
        assert_eq!(config.visible_count(1300.0), 4);
    }

    #[test]
    fn visible_count_is_never_zero() {
        let config = CarouselConfig {
            breakpoints: vec![Breakpoint { below_px: 600.0, visible: 0 }],
            widest_visible: 0,
            ..CarouselConfig::default()
        };
        assert_eq!(config.visible_count(100.0), 1);
        assert_eq!(config.visible_count(1000.0), 1);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = parse(r#"{ "carousel": { "autoplay_interval_ms": 8000 }, "hero": { "parallax_factor": 0.2 } }"#)
            .unwrap();
        assert_eq!(config.carousel.autoplay_interval_ms, 8000);
        assert_eq!(config.carousel.gap_px, 20.0);
        assert_eq!(config.carousel.swipe_threshold_px, 40.0);
        assert_eq!(config.hero.parallax_factor, 0.2);
        assert_eq!(config.header, HeaderConfig::default());
    }

    #[test]
    fn page_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.hero.parallax_factor, 0.35);
        assert_eq!((config.hero.tilt_x_px, config.hero.tilt_y_px), (18.0, 12.0));
        assert_eq!(config.reveal.threshold, 0.12);
        assert_eq!(config.reveal.root_margin, "0px 0px -40px 0px");
        assert_eq!(config.counter.duration_ms, 1600);
        assert_eq!(config.contact.feedback_ms, 3500);
        assert_eq!(config.banner.travel_px, 60.0);
        assert_eq!(config.cursor.trail_points, 28);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(parse("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse("{ carousel: ").is_err());
        assert!(parse(r#"{ "carousel": { "gap_px": "wide" } }"#).is_err());
    }
}
