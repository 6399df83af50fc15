//! Bridges the canvas bitmap (`tiny_skia::Pixmap`, premultiplied RGBA8) and
//! the `image` codec / egui texture formats.

use std::path::{Path, PathBuf};

use egui::Color32;
use tiny_skia::{ColorU8, Pixmap};

use crate::error::{PaintError, PaintResult};

/// Allocate a bitmap filled with a single color.
pub fn new_filled(width: u32, height: u32, color: Color32) -> PaintResult<Pixmap> {
    let mut pixmap = Pixmap::new(width, height).ok_or(PaintError::Allocation { width, height })?;
    pixmap.fill(skia_color(color));
    Ok(pixmap)
}

/// Convert an egui color to the rasterizer's (unpremultiplied) color.
pub fn skia_color(color: Color32) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

/// Read a single pixel back as an egui color.
pub fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> Option<Color32> {
    pixmap
        .pixel(x, y)
        .map(|p| Color32::from_rgba_premultiplied(p.red(), p.green(), p.blue(), p.alpha()))
}

pub fn from_rgba(rgba: &image::RgbaImage) -> PaintResult<Pixmap> {
    let (width, height) = rgba.dimensions();
    let mut pixmap = Pixmap::new(width, height).ok_or(PaintError::Allocation { width, height })?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(rgba.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Ok(pixmap)
}

pub fn to_rgba(pixmap: &Pixmap) -> image::RgbaImage {
    let mut rgba = image::RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in rgba.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    rgba
}

/// Decode an in-memory image in any format the codec recognizes.
pub fn decode(bytes: &[u8]) -> PaintResult<Pixmap> {
    let img = image::load_from_memory(bytes)?;
    log::debug!("Decoded image: {}x{}", img.width(), img.height());
    from_rgba(&img.to_rgba8())
}

/// Load an image file, sniffing the format from its contents.
pub fn load(path: &Path) -> PaintResult<Pixmap> {
    let img = image::ImageReader::open(path)?.with_guessed_format()?.decode()?;
    log::debug!("Loaded {}: {}x{}", path.display(), img.width(), img.height());
    from_rgba(&img.to_rgba8())
}

/// Write the bitmap as BMP. A path without an extension gets `.bmp`
/// appended; the path actually written is returned.
pub fn save_bmp(pixmap: &Pixmap, path: &Path) -> PaintResult<PathBuf> {
    let path = if path.extension().is_none() {
        path.with_extension("bmp")
    } else {
        path.to_path_buf()
    };
    to_rgba(pixmap).save_with_format(&path, image::ImageFormat::Bmp)?;
    Ok(path)
}

/// Stretch to exactly `width` x `height`, ignoring aspect ratio.
pub fn scale(pixmap: &Pixmap, width: u32, height: u32) -> PaintResult<Pixmap> {
    let scaled = image::imageops::resize(
        &to_rgba(pixmap),
        width,
        height,
        image::imageops::FilterType::Nearest,
    );
    from_rgba(&scaled)
}

pub fn to_color_image(pixmap: &Pixmap) -> egui::ColorImage {
    egui::ColorImage::from_rgba_premultiplied(
        [pixmap.width() as usize, pixmap.height() as usize],
        pixmap.data(),
    )
}

/// Two bitmaps are equal when both are null, or both have the same size and
/// identical pixels.
pub fn images_equal(a: Option<&Pixmap>, b: Option<&Pixmap>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.width() == b.width() && a.height() == b.height() && a.data() == b.data()
        }
        _ => false,
    }
}
