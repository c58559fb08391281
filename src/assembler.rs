//! Image map assembly: canvas, embedded image, clickable regions

use std::fs;
use std::path::Path;

use crate::conf::{ConfReader, Region};
use crate::error::Img2SvgError;
use crate::image::EncodedImage;
use crate::renderer::{render_document, svg, Element, SvgConfig};
use crate::style::Style;
use crate::{debug, log};

/// An SVG image map under construction.
///
/// [`ImageMap::new`] is the only constructor, so a map always holds its
/// canvas and embedded image before regions are added or it is saved.
#[derive(Debug, Clone)]
pub struct ImageMap {
    image: EncodedImage,
    style: Style,
    config: SvgConfig,
    canvas: Element,
    regions: usize,
}

impl ImageMap {
    /// Load the image and build a canvas sized to it
    pub fn new(image: &Path, style: Style) -> Result<Self, Img2SvgError> {
        let image = EncodedImage::load(image)?;

        let mut canvas = svg::canvas(image.width(), image.height());
        canvas.append(svg::embedded_image(&image));

        Ok(Self {
            image,
            style,
            config: SvgConfig::default(),
            canvas,
            regions: 0,
        })
    }

    /// Use a different serialization config
    pub fn with_svg_config(mut self, config: SvgConfig) -> Self {
        self.config = config;
        self
    }

    /// Add one link-wrapped rectangle per record of the region file.
    ///
    /// A missing path, or one that is not an existing file, adds nothing.
    /// Returns the number of regions added by this call.
    pub fn wrap(&mut self, conf: Option<&Path>) -> Result<usize, Img2SvgError> {
        let Some(path) = conf.filter(|p| p.is_file()) else {
            return Ok(0);
        };

        log!("conf"; "reading {}", path.display());
        let reader = ConfReader::new(path);

        // Build every link before touching the canvas so a bad line leaves
        // the map as it was.
        let mut links = Vec::new();
        for record in reader.records()? {
            let record = record?;
            debug!("region"; "line {}: {:?}", record.line, record.fields);
            let region = Region::from_record(&record, path)?;
            links.push(svg::link(&region, &self.style));
        }

        let added = links.len();
        for link in links {
            self.canvas.append(link);
        }
        self.regions += added;
        Ok(added)
    }

    /// Serialize the document
    pub fn render(&self) -> String {
        render_document(&self.canvas, &self.config)
    }

    /// Write the document to `outfile`, consuming the map
    pub fn save(self, outfile: &Path) -> Result<(), Img2SvgError> {
        let svg = self.render();
        fs::write(outfile, svg).map_err(|source| Img2SvgError::FileWrite {
            path: outfile.to_path_buf(),
            source,
        })?;
        log!("save"; "save file: {}", outfile.display());
        Ok(())
    }

    pub fn canvas(&self) -> &Element {
        &self.canvas
    }

    pub fn image(&self) -> &EncodedImage {
        &self.image
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Number of regions added so far
    pub fn region_count(&self) -> usize {
        self.regions
    }
}
