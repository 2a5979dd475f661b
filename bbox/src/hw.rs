use crate::common::*;

/// The size of an image, used as the reference frame for normalized boxes.
///
/// Both extents are finite and strictly positive, so dividing by them never
/// yields infinities or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HW<T> {
    h: T,
    w: T,
}

impl<T> HW<T>
where
    T: Float,
{
    pub fn try_from_hw(hw: [T; 2]) -> Result<Self> {
        let [h, w] = hw;
        let zero = T::zero();
        ensure!(
            h.is_finite() && w.is_finite(),
            "image height and width must be finite, but get h={:?} w={:?}",
            h.to_f64(),
            w.to_f64()
        );
        ensure!(
            h > zero && w > zero,
            "image height and width must be positive, but get h={:?} w={:?}",
            h.to_f64(),
            w.to_f64()
        );
        Ok(Self { h, w })
    }

    /// Build from the `(width, height)` order used by image headers.
    pub fn try_from_wh(w: T, h: T) -> Result<Self> {
        Self::try_from_hw([h, w])
    }

    /// The 1x1 frame that normalized coordinates live in.
    pub fn unit() -> Self {
        Self {
            h: T::one(),
            w: T::one(),
        }
    }

    pub fn w(&self) -> T {
        self.w
    }

    pub fn h(&self) -> T {
        self.h
    }
}
