//! Viewport geometry as seen by the interaction engine.
//!
//! Engine types never read `window` directly. They take a [`ViewportContext`]
//! so the same logic runs against the browser or against a fake in tests.

use web_sys::{Element, Window};

/// Bounding box of an element relative to the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// True while any part of the element overlaps a viewport of `viewport_height`.
    pub fn intersects_viewport(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom() > 0.0
    }

    /// Fraction of the element's height currently on screen, in `0.0..=1.0`.
    pub fn visible_ratio(&self, viewport_height: f64) -> f64 {
        if self.height <= 0.0 {
            return if self.intersects_viewport(viewport_height) { 1.0 } else { 0.0 };
        }
        let visible = self.bottom().min(viewport_height) - self.top.max(0.0);
        (visible / self.height).clamp(0.0, 1.0)
    }
}

pub trait ViewportContext {
    type Handle;

    /// Pixels scrolled from the top of the document.
    fn current_scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn viewport_width(&self) -> f64;
    /// `None` when the element is detached or geometry is unavailable.
    fn element_rect(&self, handle: &Self::Handle) -> Option<Rect>;
}

/// The live browser window.
#[derive(Clone)]
pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl ViewportContext for BrowserViewport {
    type Handle = Element;

    fn current_scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    fn element_rect(&self, handle: &Element) -> Option<Rect> {
        if !handle.is_connected() {
            return None;
        }
        let rect = handle.get_bounding_client_rect();
        Some(Rect::new(rect.top(), rect.left(), rect.width(), rect.height()))
    }
}

pub fn is_scrolled_past(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Lets at most one animation frame be pending for a burst of scroll events.
///
/// `request` returns true when the caller should schedule a frame. The frame
/// callback must call `complete` and then read the *current* scroll position,
/// so the last event of a burst is never lost.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::HashMap;

    use super::{Rect, ViewportContext};

    /// Document-space layout with a movable scroll position.
    pub struct FakeViewport {
        pub scroll_y: f64,
        pub height: f64,
        pub width: f64,
        elements: HashMap<&'static str, Rect>,
    }

    impl FakeViewport {
        pub fn new(width: f64, height: f64) -> Self {
            Self { scroll_y: 0.0, height, width, elements: HashMap::new() }
        }

        /// Places an element at `doc_top` pixels from the top of the document.
        pub fn place(&mut self, name: &'static str, doc_top: f64, height: f64) {
            self.elements.insert(name, Rect::new(doc_top, 0.0, self.width, height));
        }

        pub fn scroll_to(&mut self, y: f64) {
            self.scroll_y = y;
        }
    }

    impl ViewportContext for FakeViewport {
        type Handle = &'static str;

        fn current_scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn viewport_width(&self) -> f64 {
            self.width
        }

        fn element_rect(&self, handle: &&'static str) -> Option<Rect> {
            self.elements.get(handle).map(|doc| Rect {
                top: doc.top - self.scroll_y,
                ..*doc
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeViewport;
    use super::*;

    #[test]
    fn visible_ratio_tracks_partial_overlap() {
        let rect = Rect::new(700.0, 0.0, 100.0, 200.0);
        assert!((rect.visible_ratio(800.0) - 0.5).abs() < 1e-9);
        assert_eq!(rect.visible_ratio(600.0), 0.0);

        let above = Rect::new(-250.0, 0.0, 100.0, 200.0);
        assert_eq!(above.visible_ratio(800.0), 0.0);
        assert!(!above.intersects_viewport(800.0));
    }

    #[test]
    fn taller_than_viewport_is_partially_visible() {
        let rect = Rect::new(-100.0, 0.0, 100.0, 2000.0);
        assert!(rect.intersects_viewport(800.0));
        assert!((rect.visible_ratio(800.0) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn fake_viewport_moves_elements_with_scroll() {
        let mut viewport = FakeViewport::new(1280.0, 800.0);
        viewport.place("card", 1500.0, 300.0);
        assert_eq!(viewport.element_rect(&"card").unwrap().top, 1500.0);
        viewport.scroll_to(1000.0);
        assert_eq!(viewport.element_rect(&"card").unwrap().top, 500.0);
        assert!(viewport.element_rect(&"missing").is_none());
    }

    #[test]
    fn scroll_threshold_is_strict() {
        assert!(!is_scrolled_past(50.0, 50.0));
        assert!(is_scrolled_past(50.5, 50.0));
    }

    #[test]
    fn frame_gate_coalesces_bursts() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        gate.complete();
        assert!(gate.request());
    }
}
