/// Drawable view size in physical pixels.
///
/// Pointer coordinates delivered to the touch mapper live in the same space.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ViewSize {
    pub width: u32,
    pub height: u32,
}

impl ViewSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height. Only meaningful for a non-empty view.
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Horizontal midline (integer halving).
    #[inline]
    pub fn mid_x(self) -> u32 {
        self.width / 2
    }

    /// Vertical midline (integer halving).
    #[inline]
    pub fn mid_y(self) -> u32 {
        self.height / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midlines_truncate_odd_dimensions() {
        let v = ViewSize::new(321, 99);
        assert_eq!(v.mid_x(), 160);
        assert_eq!(v.mid_y(), 49);
    }

    #[test]
    fn is_empty_on_zero_dimension() {
        assert!(ViewSize::new(0, 10).is_empty());
        assert!(ViewSize::new(10, 0).is_empty());
        assert!(!ViewSize::new(1, 1).is_empty());
    }

    #[test]
    fn aspect_ratio_wide() {
        assert_eq!(ViewSize::new(640, 320).aspect_ratio(), 2.0);
    }
}
