//! In-process image operations.

mod resize;

pub use resize::{fit_to_aspect, resize_to_aspect, target_dimensions};
