//! Application configuration.
//!
//! Presentation tuning values for the hero section. None of these have a
//! derivation behind them; they are kept here so they can be adjusted in
//! one place.

// =============================================================================
// Parallax
// =============================================================================

/// Scroll distance (px) over which the content fades out.
pub const PARALLAX_FADE_DISTANCE: f64 = 700.0;

/// Opacity floor reached at `PARALLAX_FADE_DISTANCE * (1 - PARALLAX_MIN_OPACITY)`.
pub const PARALLAX_MIN_OPACITY: f64 = 0.2;

/// Vertical translation per scrolled pixel.
pub const PARALLAX_FACTOR: f64 = 0.5;

// =============================================================================
// Entrance sequence
// =============================================================================

/// Fade duration of the staggered container itself (seconds).
pub const CONTAINER_FADE_SECS: f64 = 0.3;

/// Delay before the first staggered child starts (seconds).
pub const STAGGER_DELAY_CHILDREN_SECS: f64 = 0.2;

/// Delay between consecutive staggered children (seconds).
pub const STAGGER_INTERVAL_SECS: f64 = 0.3;

/// Duration of each staggered child's fade/slide (seconds).
pub const ITEM_DURATION_SECS: f64 = 0.8;

/// Vertical offset (px) of a hidden staggered child.
pub const ITEM_HIDDEN_OFFSET_Y: f64 = 20.0;

/// Cubic bezier control points of the item easing.
pub const ITEM_EASING: [f64; 4] = [0.6, 0.05, -0.01, 0.9];

/// Duration of the image panel slide-in (seconds).
pub const IMAGE_PANEL_DURATION_SECS: f64 = 1.2;

/// Horizontal offset (px) of the hidden image panel.
pub const IMAGE_PANEL_HIDDEN_OFFSET_X: f64 = 100.0;

// =============================================================================
// Call-to-action spring
// =============================================================================

/// Spring used when moving into the hover pose.
pub const CTA_SPRING_STIFFNESS: f64 = 400.0;
pub const CTA_SPRING_DAMPING: f64 = 10.0;
pub const CTA_SPRING_MASS: f64 = 1.0;

/// Stiffer, better damped spring for scale changes into the tap pose and
/// back to rest.
pub const CTA_PRESS_SPRING_STIFFNESS: f64 = 500.0;
pub const CTA_PRESS_SPRING_DAMPING: f64 = 25.0;

/// Shadow fade when leaving the hover pose (seconds).
pub const CTA_SHADOW_FADE_SECS: f64 = 0.3;

/// Distance from the target under which the spring counts as settled.
pub const SPRING_REST_DELTA: f64 = 0.01;

/// Sampling rate used when turning a spring into a CSS `linear()` easing.
pub const SPRING_SAMPLE_HZ: f64 = 60.0;

pub const CTA_HOVER_SCALE: f64 = 1.05;
pub const CTA_TAP_SCALE: f64 = 0.95;
pub const CTA_HOVER_SHADOW: &str = "0 10px 25px rgba(88, 140, 126, 0.4)";

// =============================================================================
// Floating shapes
// =============================================================================

/// Peak displacement (px) and period (seconds) of the lower floating dot.
pub const FLOAT_A_AMPLITUDE: f64 = -15.0;
pub const FLOAT_A_DURATION_SECS: f64 = 3.0;

/// Peak displacement (px) and period (seconds) of the upper floating dot.
pub const FLOAT_B_AMPLITUDE: f64 = 20.0;
pub const FLOAT_B_DURATION_SECS: f64 = 4.0;

// =============================================================================
// Assets and copy
// =============================================================================

/// Hero image, served from the site root.
pub const HERO_IMAGE_SRC: &str = "/modern-salon.jpg";

pub const HERO_IMAGE_ALT: &str = "מספרה מודרנית עם אלמנטים טכנולוגיים";
pub const HERO_TITLE: &str = "מספרה ביתא";
pub const HERO_SUBTITLE: &str = "מספרה מוביל בישראל";
pub const HERO_TAGLINE: &str = "חווית לקוח מושלמת בכל ביקור";
pub const HERO_CTA_LABEL: &str = "קבע תור עכשיו";
pub const HERO_ABOUT: &str = "אנחנו מספרה מוביל בתחום המזון עם ניסיון של שנים רבות. אנחנו מתמחים במתן שירות מקצועי ואיכותי ללקוחותינו.";

/// Document title set by the application shell.
pub const PAGE_TITLE: &str = "מספרה ביתא";
