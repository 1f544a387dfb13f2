use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat};

use crate::error::{Error, Result};

/// Write `image` to `output` as PNG, replacing any existing file.
///
/// PNG has no float samples, so 32-bit float images are stored as 16-bit RGBA.
pub fn write_png(output: &Path, image: &DynamicImage) -> Result<()> {
    let encode_err = |source| Error::Encode {
        path: output.to_path_buf(),
        source,
    };

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    match image.color() {
        ColorType::Rgb32F | ColorType::Rgba32F => {
            DynamicImage::ImageRgba16(image.to_rgba16())
                .write_to(&mut writer, ImageFormat::Png)
                .map_err(encode_err)?;
        }
        _ => image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(encode_err)?,
    }
    writer.flush()?;
    Ok(())
}
