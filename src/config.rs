//! Application configuration.
//!
//! Centralized configuration for the TranzitAI frontend.
//! Everything here is hardcoded; the landing page has no runtime
//! configuration surface.

/// Application name, used for the startup log line.
pub const APP_NAME: &str = "TranzitAI";

/// Destination of both hero call-to-action buttons.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Vertical scroll offset (in pixels) past which the hero image
/// switches to its "scrolled" presentation.
///
/// Strictly greater-than: at exactly this offset the image is still
/// in its resting state.
pub const SCROLL_THRESHOLD: f64 = 100.0;

/// Hero preview image asset path.
pub const HERO_IMAGE_SRC: &str = "/bg-image1.jpeg";

/// Intrinsic width of the hero preview image.
pub const HERO_IMAGE_WIDTH: u32 = 1280;

/// Intrinsic height of the hero preview image.
pub const HERO_IMAGE_HEIGHT: u32 = 720;
