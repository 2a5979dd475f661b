use super::{Rect, TLBR};
use crate::{common::*, Transform};

/// Bounding box in TLHW format: the top-left corner plus extent.
///
/// This is the pixel-space layout used by drawing surfaces. Extents may be
/// zero or negative; use [RectNum::has_positive_extent](crate::RectNum::has_positive_extent)
/// to reject such boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TLHW<T> {
    pub t: T,
    pub l: T,
    pub h: T,
    pub w: T,
}

impl<T> TLHW<T> {
    pub fn from_tlhw(tlhw: [T; 4]) -> Self {
        let [t, l, h, w] = tlhw;
        Self { t, l, h, w }
    }
}

impl<T> TLHW<T>
where
    T: Copy + Num,
{
    pub fn transform(&self, transform: &Transform<T>) -> Self {
        TLHW {
            t: self.t * transform.sy + transform.ty,
            l: self.l * transform.sx + transform.tx,
            h: self.h * transform.sy,
            w: self.w * transform.sx,
        }
    }
}

impl<T> Rect for TLHW<T>
where
    T: Copy + Num,
{
    type Type = T;

    fn t(&self) -> Self::Type {
        self.t
    }

    fn l(&self) -> Self::Type {
        self.l
    }

    fn b(&self) -> Self::Type {
        self.t + self.h
    }

    fn r(&self) -> Self::Type {
        self.l + self.w
    }

    fn cy(&self) -> Self::Type {
        self.t + half(self.h)
    }

    fn cx(&self) -> Self::Type {
        self.l + half(self.w)
    }

    fn h(&self) -> Self::Type {
        self.h
    }

    fn w(&self) -> Self::Type {
        self.w
    }
}

impl<T> From<&TLBR<T>> for TLHW<T>
where
    T: Copy + Num,
{
    fn from(from: &TLBR<T>) -> Self {
        let TLBR { t, l, b, r } = *from;
        Self {
            t,
            l,
            h: b - t,
            w: r - l,
        }
    }
}
