use super::viewport::Rect;

const MAX_ROTATION_DEG: f64 = 15.0;
const MAGNETIC_PX: f64 = 20.0;
const HOVER_SCALE: f64 = 1.05;
const FLOAT_AMPLITUDE_PX: f64 = 10.0;

/// Pointer-relative 3D tilt for the hero portrait.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltState {
    /// Pointer position relative to the element center, each axis in `-1.0..=1.0`.
    pub x: f64,
    pub y: f64,
    pub hovering: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl TiltTransform {
    pub fn css(&self) -> String {
        format!(
            "transform: translateX({:.2}px) translateY({:.2}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({}); transform-style: preserve-3d;",
            self.translate_x, self.translate_y, self.rotate_x, self.rotate_y, self.scale
        )
    }
}

impl TiltState {
    pub fn pointer_enter(&mut self) {
        self.hovering = true;
    }

    pub fn pointer_leave(&mut self) {
        *self = Self::default();
    }

    pub fn pointer_move(&mut self, client_x: f64, client_y: f64, rect: Rect) {
        let half_w = rect.width / 2.0;
        let half_h = rect.height / 2.0;
        if half_w <= 0.0 || half_h <= 0.0 {
            self.x = 0.0;
            self.y = 0.0;
            return;
        }
        self.x = ((client_x - rect.center_x()) / half_w).clamp(-1.0, 1.0);
        self.y = ((client_y - rect.center_y()) / half_h).clamp(-1.0, 1.0);
    }

    pub fn transform(&self, float_offset: f64) -> TiltTransform {
        TiltTransform {
            rotate_x: -self.y * MAX_ROTATION_DEG,
            rotate_y: self.x * MAX_ROTATION_DEG,
            translate_x: self.x * MAGNETIC_PX,
            translate_y: self.y * MAGNETIC_PX + float_offset,
            scale: if self.hovering { HOVER_SCALE } else { 1.0 },
        }
    }

    /// Counter-shift for a background layer at the given depth factor.
    pub fn layer_shift(&self, factor: f64) -> (f64, f64) {
        (self.x * factor, self.y * factor)
    }
}

/// Idle vertical bob, one full cycle every 2π seconds.
pub fn float_offset(elapsed_ms: f64) -> f64 {
    (elapsed_ms / 1000.0).sin() * FLOAT_AMPLITUDE_PX
}
