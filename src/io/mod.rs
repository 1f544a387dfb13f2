//! I/O layer: directory scanning for source images, decoding, and the PNG
//! writer for derived images.
pub mod reader;
pub use reader::open_image;

pub mod scan;
pub use scan::{ScanResult, SourceImage, iterate_source_images};

pub mod writers;
