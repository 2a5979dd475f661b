use super::{Rect, TLHW};
use crate::{common::*, HW};

/// An axis-aligned scale followed by a translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transform<T> {
    pub sy: T,
    pub sx: T,
    pub ty: T,
    pub tx: T,
}

impl<T> Transform<T>
where
    T: Copy + Num,
{
    /// The transform that maps `src` onto `tgt`.
    pub fn from_rects<R>(src: &R, tgt: &R) -> Self
    where
        R: Rect<Type = T>,
    {
        let sy = tgt.h() / src.h();
        let sx = tgt.w() / src.w();
        let ty = tgt.t() - src.t() * sy;
        let tx = tgt.l() - src.l() * sx;

        Self { sy, sx, ty, tx }
    }
}

impl<T> Transform<T>
where
    T: Float,
{
    /// Stretch the frame of `src_size` onto the frame of `tgt_size`.
    pub fn from_sizes_exact(src_size: &HW<T>, tgt_size: &HW<T>) -> Self {
        let zero = T::zero();
        let src = TLHW::from_tlhw([zero, zero, src_size.h(), src_size.w()]);
        let tgt = TLHW::from_tlhw([zero, zero, tgt_size.h(), tgt_size.w()]);
        Self::from_rects(&src, &tgt)
    }

    /// Map unit-square coordinates back onto the pixels of an image.
    pub fn denormalizing(image_size: &HW<T>) -> Self {
        Self::from_sizes_exact(&HW::unit(), image_size)
    }
}

impl<T> Mul<&TLHW<T>> for &Transform<T>
where
    T: Copy + Num,
{
    type Output = TLHW<T>;

    fn mul(self, rhs: &TLHW<T>) -> Self::Output {
        rhs.transform(self)
    }
}
