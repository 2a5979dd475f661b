//! Bounding box geometry shared by the annotation tools.
//!
//! The rectangle types here are plain value types. They accept any
//! coordinates, including negative extents produced by detectors, and leave
//! validation to the caller. The only checked type is [HW], the image size
//! that coordinates are normalized against.

mod common;

pub use rect::*;
pub mod rect;

pub use tlbr::*;
pub mod tlbr;

pub use tlhw::*;
pub mod tlhw;

pub use cycxhw::*;
pub mod cycxhw;

pub use hw::*;
pub mod hw;

pub use transform::*;
mod transform;

pub mod prelude {
    pub use crate::rect::{Rect, RectNum};
}
