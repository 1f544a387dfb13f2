use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::naming::{SIZE_PLACEHOLDER, render_template};
use crate::error::{Error, Result};
use crate::types::ResampleFilter;

pub const DEFAULT_SIZES: [u32; 4] = [48, 32, 24, 16];
pub const DEFAULT_SOURCE_SUFFIX: &str = "_64.png";
pub const DEFAULT_OUTPUT_TEMPLATE: &str = "_{size}.png";

/// Scaling parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleParams {
    /// Square target sizes in pixels, produced in this order
    pub sizes: Vec<u32>,
    /// File name suffix identifying a source image
    pub source_suffix: String,
    /// Replacement for the source suffix; `{size}` expands to the target size
    pub output_template: String,
    pub filter: ResampleFilter,
    /// Where derived files go; None writes next to the sources
    pub output_dir: Option<PathBuf>,
    /// If true, per-file failures are counted and the batch keeps going
    pub continue_on_error: bool,
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
            output_template: DEFAULT_OUTPUT_TEMPLATE.to_string(),
            filter: ResampleFilter::default(),
            output_dir: None,
            continue_on_error: false,
        }
    }
}

impl ScaleParams {
    /// Load parameters from a JSON file. Missing fields fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: ScaleParams = serde_json::from_str(&text)?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::InvalidArgument {
                arg: "sizes",
                value: String::new(),
            });
        }
        if let Some(&size) = self.sizes.iter().find(|&&s| s == 0) {
            return Err(Error::ZeroSize { size });
        }
        if self.source_suffix.is_empty() {
            return Err(Error::InvalidArgument {
                arg: "source_suffix",
                value: String::new(),
            });
        }
        if !self.output_template.contains(SIZE_PLACEHOLDER) {
            return Err(Error::InvalidArgument {
                arg: "output_template",
                value: self.output_template.clone(),
            });
        }
        if self.output_dir.is_none() {
            self.check_in_place_overwrite()?;
        }
        Ok(())
    }

    /// Reject sizes whose rendered name equals the source suffix. Such a size
    /// overwrites the source whenever derived files land in the input directory.
    pub fn check_in_place_overwrite(&self) -> Result<()> {
        for &size in &self.sizes {
            if render_template(&self.output_template, size) == self.source_suffix {
                return Err(Error::InvalidArgument {
                    arg: "sizes",
                    value: size.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Directory derived files are written to for sources found in `input_dir`.
    pub fn resolve_output_dir<'a>(&'a self, input_dir: &'a Path) -> &'a Path {
        self.output_dir.as_deref().unwrap_or(input_dir)
    }
}
