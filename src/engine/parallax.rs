use super::viewport::{Rect, ViewportContext};
use crate::config::PARALLAX_SPEED;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParallaxDirection {
    #[default]
    Up,
    Down,
}

impl ParallaxDirection {
    pub fn sign(self) -> f64 {
        match self {
            ParallaxDirection::Up => -1.0,
            ParallaxDirection::Down => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxConfig {
    pub speed: f64,
    pub direction: ParallaxDirection,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { speed: PARALLAX_SPEED, direction: ParallaxDirection::Up }
    }
}

/// Vertical offset that makes an element lag or lead the page scroll.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxOffsetComputer {
    config: ParallaxConfig,
    offset: f64,
}

impl ParallaxOffsetComputer {
    pub fn new(config: ParallaxConfig) -> Self {
        Self { config, offset: 0.0 }
    }

    pub fn config(&self) -> ParallaxConfig {
        self.config
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Updates the offset from raw geometry. Outside the viewport the previous
    /// offset is kept so the element does not jump when it comes back.
    pub fn compute(&mut self, scroll_y: f64, rect: Rect, viewport_height: f64) -> f64 {
        if rect.intersects_viewport(viewport_height) {
            let element_top = rect.top + scroll_y;
            self.offset = (scroll_y - element_top) * self.config.speed * self.config.direction.sign();
        }
        self.offset
    }

    pub fn recompute<V: ViewportContext>(&mut self, viewport: &V, handle: &V::Handle) -> f64 {
        match viewport.element_rect(handle) {
            Some(rect) => self.compute(viewport.current_scroll_y(), rect, viewport.viewport_height()),
            None => self.offset,
        }
    }
}

/// CSS transform for a vertical parallax offset.
pub fn translate_y(offset: f64) -> String {
    format!("translateY({:.2}px)", offset)
}

/// Layered hero effect for the case-study page, keyed on raw scroll only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFade {
    pub opacity: f64,
    pub scale: f64,
    /// Offset of the content block, slower than the page.
    pub content_offset: f64,
    /// Offsets of the three decorative background layers, back to front.
    pub layer_offsets: [f64; 3],
    pub backdrop_scale: f64,
}

pub fn hero_fade(scroll_y: f64) -> HeroFade {
    let y = scroll_y.max(0.0);
    HeroFade {
        opacity: (1.0 - y / 800.0).max(0.0),
        scale: (1.0 - y / 3000.0).max(0.85),
        content_offset: y * 0.1,
        layer_offsets: [y * 0.3, y * 0.2, y * 0.25],
        backdrop_scale: 1.0 + y * 0.0002,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::viewport::fake::FakeViewport;

    fn computer(speed: f64, direction: ParallaxDirection) -> ParallaxOffsetComputer {
        ParallaxOffsetComputer::new(ParallaxConfig { speed, direction })
    }

    #[test]
    fn zero_speed_never_moves() {
        let mut viewport = FakeViewport::new(1280.0, 800.0);
        viewport.place("footer", 500.0, 300.0);
        let mut parallax = computer(0.0, ParallaxDirection::Down);
        for y in [0.0, 120.0, 400.0, 650.0] {
            viewport.scroll_to(y);
            assert_eq!(parallax.recompute(&viewport, &"footer"), 0.0);
        }
    }

    #[test]
    fn full_speed_down_tracks_scroll_delta() {
        let mut viewport = FakeViewport::new(1280.0, 800.0);
        viewport.place("section", 600.0, 400.0);
        let mut parallax = computer(1.0, ParallaxDirection::Down);

        viewport.scroll_to(300.0);
        assert_eq!(parallax.recompute(&viewport, &"section"), 300.0 - 600.0);

        viewport.scroll_to(700.0);
        assert_eq!(parallax.recompute(&viewport, &"section"), 700.0 - 600.0);
    }

    #[test]
    fn up_inverts_sign() {
        let rect = Rect::new(200.0, 0.0, 100.0, 100.0);
        let mut parallax = computer(0.5, ParallaxDirection::Up);
        assert_eq!(parallax.compute(0.0, rect, 800.0), 100.0);
    }

    #[test]
    fn offset_freezes_outside_viewport() {
        let mut viewport = FakeViewport::new(1280.0, 800.0);
        viewport.place("card", 1000.0, 200.0);
        let mut parallax = computer(0.5, ParallaxDirection::Down);

        viewport.scroll_to(900.0);
        let last = parallax.recompute(&viewport, &"card");
        assert_eq!(last, -50.0);

        // fully above the viewport
        viewport.scroll_to(5000.0);
        assert_eq!(parallax.recompute(&viewport, &"card"), last);

        // back to far below
        viewport.scroll_to(0.0);
        assert_eq!(parallax.recompute(&viewport, &"card"), last);
    }

    #[test]
    fn detached_element_keeps_offset() {
        let viewport = FakeViewport::new(1280.0, 800.0);
        let mut parallax = computer(0.5, ParallaxDirection::Down);
        assert_eq!(parallax.recompute(&viewport, &"gone"), 0.0);
    }

    #[test]
    fn transform_string() {
        let mut parallax = computer(1.0, ParallaxDirection::Down);
        let offset = parallax.compute(10.0, Rect::new(5.0, 0.0, 10.0, 10.0), 800.0);
        assert_eq!(translate_y(offset), "translateY(-5.00px)");
    }

    #[test]
    fn hero_fade_bottoms_out() {
        let start = hero_fade(0.0);
        assert_eq!(start.opacity, 1.0);
        assert_eq!(start.scale, 1.0);

        let deep = hero_fade(10_000.0);
        assert_eq!(deep.opacity, 0.0);
        assert_eq!(deep.scale, 0.85);
        assert_eq!(deep.layer_offsets[0], 3000.0);
    }
}
