//! SVG tree construction and serialization
//!
//! Elements are plain [`Element`] nodes; [`svg`] holds the constructors for
//! the element kinds an image map uses and writes the final document.

pub mod config;
pub mod element;
pub mod svg;

pub use config::SvgConfig;
pub use element::Element;
pub use svg::render_document;
