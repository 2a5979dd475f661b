use super::{CyCxHW, TLHW};
use crate::common::*;

/// The generic rectangle.
///
/// `t`/`b` run along the image rows (y axis) and `l`/`r` along the columns
/// (x axis).
pub trait Rect {
    type Type;

    fn t(&self) -> Self::Type;
    fn l(&self) -> Self::Type;
    fn b(&self) -> Self::Type;
    fn r(&self) -> Self::Type;
    fn cy(&self) -> Self::Type;
    fn cx(&self) -> Self::Type;
    fn h(&self) -> Self::Type;
    fn w(&self) -> Self::Type;
}

pub trait RectNum: Rect
where
    Self::Type: Num + PartialOrd + Copy,
{
    fn cycxhw(&self) -> [Self::Type; 4] {
        [self.cy(), self.cx(), self.h(), self.w()]
    }

    fn tlbr(&self) -> [Self::Type; 4] {
        [self.t(), self.l(), self.b(), self.r()]
    }

    fn tlhw(&self) -> [Self::Type; 4] {
        [self.t(), self.l(), self.h(), self.w()]
    }

    fn to_cycxhw(&self) -> CyCxHW<Self::Type> {
        CyCxHW::from_cycxhw(self.cycxhw())
    }

    fn to_tlhw(&self) -> TLHW<Self::Type> {
        TLHW::from_tlhw(self.tlhw())
    }

    /// Whether both extents are strictly positive.
    ///
    /// NaN extents compare false and are treated as non-positive.
    fn has_positive_extent(&self) -> bool {
        let zero = <Self::Type as Zero>::zero();
        self.h() > zero && self.w() > zero
    }
}

impl<T> RectNum for T
where
    T: Rect,
    T::Type: Num + PartialOrd + Copy,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rect_conversions_agree() {
        let tlhw = TLHW::from_tlhw([10.0, 20.0, 40.0, 30.0]);
        let cycxhw = tlhw.to_cycxhw();

        assert_abs_diff_eq!(cycxhw.cy(), 30.0);
        assert_abs_diff_eq!(cycxhw.cx(), 35.0);
        assert_eq!(tlhw.tlbr(), [10.0, 20.0, 50.0, 50.0]);
        assert_eq!(cycxhw.to_tlhw(), tlhw);
    }

    #[test]
    fn rect_positive_extent() {
        assert!(TLHW::from_tlhw([0.0, 0.0, 1.0, 1.0]).has_positive_extent());
        assert!(!TLHW::from_tlhw([0.0, 0.0, 0.0, 1.0]).has_positive_extent());
        assert!(!TLHW::from_tlhw([0.0, 0.0, 1.0, -1.0]).has_positive_extent());
        assert!(!TLHW::from_tlhw([0.0, 0.0, f64::NAN, 1.0]).has_positive_extent());
    }
}
