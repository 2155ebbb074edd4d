//! Unit types: Dp and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Dp = Dp(0.0);

    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }

    pub fn max(self, other: Dp) -> Dp {
        Dp(self.0.max(other.0))
    }
}

impl std::ops::Mul<f32> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f32) -> Dp {
        Dp(self.0 * rhs)
    }
}
