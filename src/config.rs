use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose engine transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Fraction of an element that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Scroll distance after which the header switches to its compact look.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

pub const PARALLAX_SPEED: f64 = 0.5;

pub const CAROUSEL_AUTO_ADVANCE_MS: u64 = 4000;
pub const CAROUSEL_COOLDOWN_MS: u64 = 2000;
pub const CAROUSEL_TRANSITION_MS: u64 = 500;
pub const CAROUSEL_SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Below this width the testimonials switch to the swipeable single-card view.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Delay before the hash is dropped from the address bar after a smooth scroll.
pub const HASH_REMOVAL_DELAY_MS: u32 = 100;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
