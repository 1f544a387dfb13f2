#![doc = r#"
iconscale: batch downscaling for icon sets.

Given a directory of full-resolution icons named with a size suffix
(`save_64.png`, `open_64.png`, ...), iconscale writes square copies at every
configured size next to them (`save_48.png`, `save_32.png`, ...). It powers the
`iconscale` binary and can be embedded in build scripts.

Defaults
--------
- Source suffix: `_64.png`
- Target sizes: 48, 32, 24, 16
- Output name: source suffix replaced by `_{size}.png`
- Filter: bicubic (Catmull-Rom)
- Output: PNG, same directory as the sources

Process a directory
-------------------
```rust,no_run
use std::path::Path;
use iconscale::{process_directory, ScaleParams};

fn main() -> iconscale::Result<()> {
    let report = process_directory(Path::new("assets/icons"), &ScaleParams::default())?;
    println!("processed={} written={}", report.processed, report.written);
    Ok(())
}
```

Custom sizes and output directory
---------------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use iconscale::{process_directory, ResampleFilter, ScaleParams};

fn main() -> iconscale::Result<()> {
    let params = ScaleParams {
        sizes: vec![128, 96],
        source_suffix: "_256.png".to_string(),
        output_template: "_{size}.png".to_string(),
        filter: ResampleFilter::Lanczos3,
        output_dir: Some(PathBuf::from("build/icons")),
        continue_on_error: true,
    };
    let report = process_directory(Path::new("assets/icons"), &params)?;
    println!("errors={}", report.errors);
    Ok(())
}
```

In memory
---------
```rust
use image::{DynamicImage, RgbaImage};
use iconscale::{scale_image, ScaleParams};

fn main() -> iconscale::Result<()> {
    let icon = DynamicImage::ImageRgba8(RgbaImage::new(64, 64));
    for variant in scale_image(&icon, &ScaleParams::default())? {
        assert_eq!(variant.image.width(), variant.size);
    }
    Ok(())
}
```

Error handling
--------------
All public functions return `iconscale::Result<T>`; match on `iconscale::Error`
to handle specific cases.

```rust,no_run
use std::path::Path;
use iconscale::{process_directory, Error, ScaleParams};

fn main() {
    match process_directory(Path::new("assets/icons"), &ScaleParams::default()) {
        Ok(_) => {}
        Err(Error::Decode { path, .. }) => eprintln!("not an image: {}", path.display()),
        Err(other) => eprintln!("error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`]: high-level entry points.
- [`core`]: parameters, naming rules, resize primitive.
- [`io`]: directory scanning, decoding and the PNG writer.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::ScaleParams;
pub use error::{Error, Result};
pub use types::ResampleFilter;

// I/O
pub use io::{ScanResult, SourceImage, iterate_source_images, open_image};

// High-level API re-exports
pub use api::{BatchReport, ScaledImage, process_directory, process_source_file, scale_image};
