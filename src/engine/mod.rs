//! Scroll and pointer driven interaction logic, free of any rendering.

pub mod carousel;
pub mod parallax;
pub mod reveal;
pub mod tilt;
pub mod viewport;

pub use carousel::{CarouselConfig, CarouselController, CarouselPhase, Direction, Millis};
pub use parallax::{hero_fade, ParallaxConfig, ParallaxDirection, ParallaxOffsetComputer};
pub use reveal::{IntersectionSample, RevealConfig, RevealTracker, RevealUpdate};
pub use tilt::{float_offset, TiltState};
pub use viewport::{is_scrolled_past, BrowserViewport, FrameGate, ViewportContext};

/// Wall clock in milliseconds, as the carousel expects it.
pub fn now_ms() -> Millis {
    chrono::Utc::now().timestamp_millis().max(0) as Millis
}
