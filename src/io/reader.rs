use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::error::{Error, Result};

/// Decode the image at `path`, guessing the format from its content.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let open_err = |source| Error::Open {
        path: path.to_path_buf(),
        source,
    };
    let decode_err = |source| Error::Decode {
        path: path.to_path_buf(),
        source,
    };
    ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?
        .decode()
        .map_err(decode_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone_64.png");

        let err = open_image(&path).unwrap_err();

        assert!(matches!(err, Error::Open { path: ref p, .. } if *p == path));
        assert!(err.to_string().contains("gone_64.png"));
    }
}
