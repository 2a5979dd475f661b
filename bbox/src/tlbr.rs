use super::Rect;
use crate::common::*;

/// Bounding box in TLBR format, the corner pair emitted by detectors.
///
/// The corners are not required to be ordered. A box with `b < t` reports a
/// negative height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TLBR<T> {
    pub t: T,
    pub l: T,
    pub b: T,
    pub r: T,
}

impl<T> TLBR<T> {
    /// Build from the `(x1, y1, x2, y2)` corner order used by detector output.
    pub fn from_xyxy(xyxy: [T; 4]) -> Self {
        let [l, t, r, b] = xyxy;
        Self { t, l, b, r }
    }
}

impl<T> Rect for TLBR<T>
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
        self.b
    }

    fn r(&self) -> Self::Type {
        self.r
    }

    fn cy(&self) -> Self::Type {
        self.t + half(self.h())
    }

    fn cx(&self) -> Self::Type {
        self.l + half(self.w())
    }

    fn h(&self) -> Self::Type {
        self.b - self.t
    }

    fn w(&self) -> Self::Type {
        self.r - self.l
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RectNum;

    #[test]
    fn tlbr_from_xyxy_keeps_unordered_corners() {
        let tlbr = TLBR::from_xyxy([30.0, 40.0, 10.0, 50.0]);
        assert_eq!(tlbr.tlbr(), [40.0, 30.0, 50.0, 10.0]);
        assert_eq!(tlbr.w(), -20.0);
        assert_eq!(tlbr.h(), 10.0);
    }
}
