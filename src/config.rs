//! Defaults and limits shared by the canvas, tools and dialogs.

use std::ops::RangeInclusive;

use crate::error::{PaintError, PaintResult};

pub const DEFAULT_IMG_WIDTH: u32 = 640;
pub const DEFAULT_IMG_HEIGHT: u32 = 480;
pub const DEFAULT_PEN_THICKNESS: f32 = 1.0;
pub const DEFAULT_ERASER_THICKNESS: f32 = 10.0;
pub const DEFAULT_RECT_CURVE: u32 = 10;

/// Slider range for every stroke width.
pub const PEN_SIZE_RANGE: RangeInclusive<f32> = 1.0..=50.0;
/// Rounded-rectangle corner curve, as a percentage of half the box.
pub const RECT_CURVE_RANGE: RangeInclusive<u32> = 0..=100;

// Each undo entry holds two full copies of the bitmap.
pub const IMG_WIDTH_RANGE: RangeInclusive<u32> = 1..=2560;
pub const IMG_HEIGHT_RANGE: RangeInclusive<u32> = 1..=1440;

/// Maximum number of commands kept on the undo stack.
pub const UNDO_LIMIT: usize = 100;

/// Clamp a requested canvas size into the supported range.
pub fn clamp_image_size(width: u32, height: u32) -> (u32, u32) {
    (
        width.clamp(*IMG_WIDTH_RANGE.start(), *IMG_WIDTH_RANGE.end()),
        height.clamp(*IMG_HEIGHT_RANGE.start(), *IMG_HEIGHT_RANGE.end()),
    )
}

/// Reject canvas sizes the New and Resize operations do not support.
pub fn validate_image_size(width: u32, height: u32) -> PaintResult<()> {
    if IMG_WIDTH_RANGE.contains(&width) && IMG_HEIGHT_RANGE.contains(&height) {
        Ok(())
    } else {
        Err(PaintError::InvalidDimensions { width, height })
    }
}
