//! Raster image loading and base64 embedding

use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose, Engine as _};

use crate::error::Img2SvgError;

/// MIME prefix written in front of the embedded payload
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// An image read from disk, kept as its original bytes.
///
/// Dimensions are decoded from the image header; the payload is the file
/// itself, so embedding it is byte-exact.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    path: PathBuf,
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl EncodedImage {
    /// Read the image file and decode its pixel dimensions
    pub fn load(path: &Path) -> Result<Self, Img2SvgError> {
        let bytes = fs::read(path).map_err(|source| Img2SvgError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path, bytes)
    }

    /// Decode dimensions from bytes already in memory
    pub fn from_bytes(path: &Path, bytes: Vec<u8>) -> Result<Self, Img2SvgError> {
        let decode_err = |source: imagesize::ImageError| Img2SvgError::ImageDecode {
            path: path.to_path_buf(),
            source,
        };

        let size = imagesize::blob_size(&bytes).map_err(decode_err)?;
        let width = u32::try_from(size.width)
            .map_err(|_| decode_err(imagesize::ImageError::CorruptedImage))?;
        let height = u32::try_from(size.height)
            .map_err(|_| decode_err(imagesize::ImageError::CorruptedImage))?;

        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
            bytes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The raw file contents, standard base64 with padding
    pub fn base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// `data:` URI suitable for an `xlink:href`
    pub fn data_url(&self) -> String {
        format!("{}{}", DATA_URL_PREFIX, self.base64())
    }
}
