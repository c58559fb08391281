//! img2svg - turn a raster image into a clickable SVG image map
//!
//! The image is embedded as a base64 data URI and overlaid with invisible
//! rectangles, one per line of a tab-separated region file. Each rectangle is
//! wrapped in a link and lights up while the pointer hovers it.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use img2svg::{ImageMap, Style};
//!
//! let mut map = ImageMap::new(Path::new("floorplan.png"), Style::default()).unwrap();
//! map.wrap(Some(Path::new("rooms.txt"))).unwrap();
//! map.save(Path::new("floorplan.svg")).unwrap();
//! ```

pub mod logger;

pub mod assembler;
pub mod conf;
pub mod error;
pub mod image;
pub mod renderer;
pub mod style;

pub use assembler::ImageMap;
pub use conf::{ConfReader, Record, Region};
pub use error::Img2SvgError;
pub use image::EncodedImage;
pub use renderer::{render_document, Element, SvgConfig};
pub use style::Style;

use std::path::Path;

/// Build an image map from `image` and an optional region file, and write it
/// to `outfile`. Returns the number of regions written.
pub fn convert(
    image: &Path,
    conf: Option<&Path>,
    outfile: &Path,
    style: Style,
) -> Result<usize, Img2SvgError> {
    let mut map = ImageMap::new(image, style)?;
    map.wrap(conf)?;
    let regions = map.region_count();
    map.save(outfile)?;
    Ok(regions)
}
