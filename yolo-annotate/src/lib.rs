//! Building blocks of a YOLO-format image annotation workflow.
//!
//! The crate converts boxes between pixel and normalized coordinates, reads
//! and writes YOLO label files, turns raw detector output into boxes, scans
//! dataset folders for labelled images and picks overlay colors.

mod common;
pub mod boxes;
pub mod color;
pub mod config;
pub mod convert;
pub mod dataset;
pub mod detection;
pub mod label_text;

pub use boxes::*;
pub use color::*;
pub use convert::*;
pub use detection::*;
