use super::Rect;
use crate::{common::*, HW};

/// Bounding box in CyCxHW format, the layout of YOLO label lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CyCxHW<T> {
    pub cy: T,
    pub cx: T,
    pub h: T,
    pub w: T,
}

impl<T> CyCxHW<T> {
    pub fn from_cycxhw(cycxhw: [T; 4]) -> Self {
        let [cy, cx, h, w] = cycxhw;
        Self { cy, cx, h, w }
    }
}

impl<T> CyCxHW<T>
where
    T: Float,
{
    /// Express the box in units of `image_size`.
    ///
    /// Every coordinate is divided by the image extent along its axis.
    /// Multiplying by the reciprocal instead can round the last digit of a
    /// label file differently.
    pub fn normalize(&self, image_size: &HW<T>) -> Self {
        let (image_h, image_w) = (image_size.h(), image_size.w());
        Self {
            cy: self.cy / image_h,
            cx: self.cx / image_w,
            h: self.h / image_h,
            w: self.w / image_w,
        }
    }
}

impl<T> Rect for CyCxHW<T>
where
    T: Copy + Num,
{
    type Type = T;

    fn t(&self) -> Self::Type {
        self.cy - half(self.h)
    }

    fn l(&self) -> Self::Type {
        self.cx - half(self.w)
    }

    fn b(&self) -> Self::Type {
        self.cy + half(self.h)
    }

    fn r(&self) -> Self::Type {
        self.cx + half(self.w)
    }

    fn cy(&self) -> Self::Type {
        self.cy
    }

    fn cx(&self) -> Self::Type {
        self.cx
    }

    fn h(&self) -> Self::Type {
        self.h
    }

    fn w(&self) -> Self::Type {
        self.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_divides_by_image_extent() {
        let size = HW::try_from_wh(640.0, 480.0).unwrap();
        let cycxhw = CyCxHW::from_cycxhw([125.0, 14.43 + 13.3 / 2.0, 50.0, 13.3]);
        let normalized = cycxhw.normalize(&size);

        assert_eq!(normalized.cx, (14.43 + 13.3 / 2.0) / 640.0);
        assert_eq!(normalized.cy, 125.0 / 480.0);
        assert_eq!(normalized.w, 13.3 / 640.0);
        assert_eq!(normalized.h, 50.0 / 480.0);
        assert_eq!(format!("{:.6}", normalized.cx), "0.032937");
    }
}
