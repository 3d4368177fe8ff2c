use super::viewport::ViewportContext;
use crate::config::REVEAL_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Required on-screen fraction, clamped to `0.0..=1.0`.
    pub threshold: f64,
    pub delay_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: REVEAL_THRESHOLD, delay_ms: 0 }
    }
}

/// One observer callback worth of data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealUpdate {
    /// Still waiting, keep observing.
    Pending,
    /// Just latched. The caller must stop observing now.
    Revealed,
    /// Already visible or no longer observing.
    Ignored,
}

/// One-shot visibility latch for entrance transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTracker {
    config: RevealConfig,
    reduced_motion: bool,
    visible: bool,
    observing: bool,
}

impl RevealTracker {
    pub fn new(config: RevealConfig, reduced_motion: bool) -> Self {
        let config = RevealConfig {
            threshold: config.threshold.clamp(0.0, 1.0),
            ..config
        };
        Self {
            config,
            reduced_motion,
            visible: reduced_motion,
            observing: !reduced_motion,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether an observer should currently be registered.
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// The environment cannot observe intersections; content is shown as is.
    pub fn observer_unavailable(&mut self) {
        if !self.visible {
            log::warn!("Intersection observation unavailable, revealing without animation");
        }
        self.visible = true;
        self.observing = false;
    }

    pub fn observe(&mut self, sample: IntersectionSample) -> RevealUpdate {
        if !self.observing {
            return RevealUpdate::Ignored;
        }
        if sample.is_intersecting && sample.ratio >= self.config.threshold {
            self.visible = true;
            self.observing = false;
            return RevealUpdate::Revealed;
        }
        RevealUpdate::Pending
    }

    /// Samples an element through a viewport instead of an observer callback.
    /// A missing rect leaves the tracker waiting.
    pub fn observe_in<V: ViewportContext>(&mut self, viewport: &V, handle: &V::Handle) -> RevealUpdate {
        let Some(rect) = viewport.element_rect(handle) else {
            return if self.observing { RevealUpdate::Pending } else { RevealUpdate::Ignored };
        };
        let viewport_height = viewport.viewport_height();
        self.observe(IntersectionSample {
            is_intersecting: rect.intersects_viewport(viewport_height),
            ratio: rect.visible_ratio(viewport_height),
        })
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Whether the caller should render a transition at all.
    pub fn animates(&self) -> bool {
        !self.reduced_motion
    }

    pub fn transition_delay_ms(&self) -> u32 {
        if self.reduced_motion {
            0
        } else {
            self.config.delay_ms
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::viewport::fake::FakeViewport;

    fn hit(ratio: f64) -> IntersectionSample {
        IntersectionSample { is_intersecting: ratio > 0.0, ratio }
    }

    #[test]
    fn reduced_motion_is_visible_immediately() {
        let tracker = RevealTracker::new(RevealConfig { threshold: 0.1, delay_ms: 300 }, true);
        assert!(tracker.is_visible());
        assert!(!tracker.is_observing());
        assert!(!tracker.animates());
        assert_eq!(tracker.transition_delay_ms(), 0);
    }

    #[test]
    fn latches_on_first_crossing() {
        let mut tracker = RevealTracker::new(RevealConfig { threshold: 0.1, delay_ms: 200 }, false);
        assert!(!tracker.is_visible());
        assert_eq!(tracker.observe(hit(0.05)), RevealUpdate::Pending);
        assert!(!tracker.is_visible());
        assert_eq!(tracker.observe(hit(0.1)), RevealUpdate::Revealed);
        assert!(tracker.is_visible());
        assert!(!tracker.is_observing());
        assert_eq!(tracker.transition_delay_ms(), 200);
    }

    #[test]
    fn never_reverts_after_reveal() {
        let mut tracker = RevealTracker::new(RevealConfig::default(), false);
        tracker.observe(hit(0.5));
        for _ in 0..10 {
            assert_eq!(tracker.observe(hit(0.0)), RevealUpdate::Ignored);
            assert!(tracker.is_visible());
        }
    }

    #[test]
    fn unavailable_observer_fails_open() {
        let mut tracker = RevealTracker::new(RevealConfig::default(), false);
        tracker.observer_unavailable();
        assert!(tracker.is_visible());
        assert_eq!(tracker.observe(hit(0.0)), RevealUpdate::Ignored);
    }

    #[test]
    fn threshold_is_clamped() {
        let tracker = RevealTracker::new(RevealConfig { threshold: 3.0, delay_ms: 0 }, false);
        assert_eq!(tracker.threshold(), 1.0);
    }

    #[test]
    fn scrolling_into_view_reveals_once() {
        let mut viewport = FakeViewport::new(1280.0, 800.0);
        viewport.place("quote", 1200.0, 400.0);
        let mut tracker = RevealTracker::new(RevealConfig::default(), false);

        assert_eq!(tracker.observe_in(&viewport, &"quote"), RevealUpdate::Pending);

        // 20px of a 400px element is below the 10% threshold
        viewport.scroll_to(420.0);
        assert_eq!(tracker.observe_in(&viewport, &"quote"), RevealUpdate::Pending);

        viewport.scroll_to(600.0);
        assert_eq!(tracker.observe_in(&viewport, &"quote"), RevealUpdate::Revealed);

        viewport.scroll_to(0.0);
        assert_eq!(tracker.observe_in(&viewport, &"quote"), RevealUpdate::Ignored);
        assert!(tracker.is_visible());
    }
}
