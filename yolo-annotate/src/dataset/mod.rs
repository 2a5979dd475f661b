//! Dataset folder toolkit: image discovery, label files and the class list.

mod classes;
mod scan;
mod store;

pub use classes::*;
pub use scan::*;
pub use store::*;
