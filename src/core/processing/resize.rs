use fast_image_resize::{ResizeOptions, Resizer};
use image::DynamicImage;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

/// Resize `src` to a `size`x`size` image with the same pixel layout.
///
/// Non-square sources are stretched to the square target, which is logged.
/// Pass a reused `Resizer` when scaling one source to several sizes.
pub fn resize_square_with(
    resizer: &mut Resizer,
    src: &DynamicImage,
    size: u32,
    filter: ResampleFilter,
) -> Result<DynamicImage> {
    if size == 0 {
        return Err(Error::ZeroSize { size });
    }

    let (width, height) = (src.width(), src.height());
    if width != height {
        warn!(
            "Source is not square ({}x{}); stretching to {}x{}",
            width, height, size, size
        );
    }
    debug!(
        "Resizing {}x{} -> {}x{} ({})",
        width, height, size, size, filter
    );

    let resize_options = ResizeOptions::new().resize_alg(filter.resize_alg());
    let mut dst_image = DynamicImage::new(size, size, src.color());
    resizer.resize(src, &mut dst_image, &resize_options)?;

    Ok(dst_image)
}

pub fn resize_square(src: &DynamicImage, size: u32, filter: ResampleFilter) -> Result<DynamicImage> {
    let mut resizer = Resizer::new();
    resize_square_with(&mut resizer, src, size, filter)
}
