use clap::Parser;
use std::path::PathBuf;

use iconscale::ResampleFilter;

#[derive(Parser, Debug)]
#[command(name = "iconscale", version, about = "Downscale *_64.png icons to smaller sizes")]
pub struct CliArgs {
    /// Directory containing the source images
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Write derived images here instead of next to the sources
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// JSON file with scaling parameters; flags given here take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target sizes in pixels, comma separated (e.g. 48,32,24,16)
    #[arg(short, long, value_delimiter = ',')]
    pub sizes: Option<Vec<u32>>,

    /// File name suffix identifying source images
    #[arg(long)]
    pub suffix: Option<String>,

    /// Replacement for the suffix in derived names; {size} expands to the target size
    #[arg(long)]
    pub template: Option<String>,

    /// Resampling filter (nearest, bilinear, bicubic, lanczos3)
    #[arg(short, long, value_enum)]
    pub filter: Option<ResampleFilter>,

    /// Keep going when a source fails, and report the count at the end
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
