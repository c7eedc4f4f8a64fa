//! Custom pointer: a dot pinned to the mouse and a ring trailing behind it,
//! plus the magnetic pull interactive elements feel toward the mouse.

/// Fraction of the remaining distance the ring covers per frame.
const TRAIL_LERP: f32 = 0.15;
/// How far a hovered element follows the mouse, relative to its offset
/// from the element's center.
const MAGNETIC_PULL: f32 = 0.4;

#[derive(Debug, Clone, Default)]
pub struct CursorTrail {
    pointer: (f32, f32),
    ring: (f32, f32),
}

impl CursorTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        self.ring.0 += (self.pointer.0 - self.ring.0) * TRAIL_LERP;
        self.ring.1 += (self.pointer.1 - self.ring.1) * TRAIL_LERP;
    }

    /// Dot position: exactly the pointer.
    pub fn dot(&self) -> (f32, f32) {
        self.pointer
    }

    /// Ring position: lagging behind the pointer.
    pub fn ring(&self) -> (f32, f32) {
        self.ring
    }
}

/// An element's on-screen box in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Translation to apply to a hovered element so it leans toward the
/// pointer at `(x, y)`.
pub fn magnetic_offset(rect: Rect, x: f32, y: f32) -> (f32, f32) {
    let dx = x - rect.left - rect.width / 2.0;
    let dy = y - rect.top - rect.height / 2.0;
    (dx * MAGNETIC_PULL, dy * MAGNETIC_PULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_follows_pointer_exactly() {
        let mut c = CursorTrail::new();
        c.set_pointer(120.0, 40.0);
        assert_eq!(c.dot(), (120.0, 40.0));
        assert_eq!(c.ring(), (0.0, 0.0));
    }

    #[test]
    fn ring_trails_and_converges() {
        let mut c = CursorTrail::new();
        c.set_pointer(100.0, -20.0);
        c.step();
        let (x, y) = c.ring();
        assert!((x - 15.0).abs() < 1e-4);
        assert!((y + 3.0).abs() < 1e-4);
        c.step();
        assert!((c.ring().0 - 27.75).abs() < 1e-4);
        for _ in 0..200 {
            c.step();
        }
        assert!((c.ring().0 - 100.0).abs() < 1e-3);
        assert!((c.ring().1 + 20.0).abs() < 1e-3);
    }

    #[test]
    fn magnetic_offset_scales_from_center() {
        let rect = Rect {
            left: 10.0,
            top: 20.0,
            width: 100.0,
            height: 40.0,
        };
        assert_eq!(magnetic_offset(rect, 60.0, 40.0), (0.0, 0.0));
        let (dx, dy) = magnetic_offset(rect, 110.0, 20.0);
        assert!((dx - 20.0).abs() < 1e-5);
        assert!((dy + 8.0).abs() < 1e-5);
    }
}
