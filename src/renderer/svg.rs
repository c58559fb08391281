//! SVG element constructors and document output

use crate::conf::Region;
use crate::image::EncodedImage;
use crate::style::Style;

use super::{Element, SvgConfig};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

/// Root `<svg>` element scaled to fill its container while keeping the
/// image's aspect ratio
pub fn canvas(width: u32, height: u32) -> Element {
    Element::new("svg")
        .with_attr("xmlns", SVG_NS)
        .with_attr("xmlns:xlink", XLINK_NS)
        .with_attr("version", "1.1")
        .with_attr("width", "100%")
        .with_attr("height", "100%")
        .with_attr("viewBox", format!("0 0 {} {}", width, height))
        .with_attr("preserveAspectRatio", "xMidYMid meet")
}

/// `<image>` covering the whole canvas, inlined as a data URI
pub fn embedded_image(image: &EncodedImage) -> Element {
    Element::new("image")
        .with_attr("x", "0")
        .with_attr("y", "0")
        .with_attr("width", image.width().to_string())
        .with_attr("height", image.height().to_string())
        .with_attr("xlink:href", image.data_url())
}

/// Invisible `<rect>` that shows `style.fill_opacity` while hovered
pub fn region_rect(region: &Region, style: &Style) -> Element {
    Element::new("rect")
        .with_attr("x", region.x.to_string())
        .with_attr("y", region.y.to_string())
        .with_attr("width", region.width().to_string())
        .with_attr("height", region.height().to_string())
        .with_attr("fill", style.fill_color.as_str())
        .with_attr("fill-opacity", "0")
        .with_attr(
            "onmouseover",
            format!(
                "evt.target.style['fill-opacity'] = {};",
                style.fill_opacity
            ),
        )
        .with_attr("onmouseout", "evt.target.style['fill-opacity'] = 0;")
}

/// `<a>` wrapping the region's rectangle
pub fn link(region: &Region, style: &Style) -> Element {
    Element::new("a")
        .with_attr("target", style.link_target.as_str())
        .with_attr("xlink:title", region.title.as_str())
        .with_attr("xlink:href", region.href.as_str())
        .with_child(region_rect(region, style))
}

/// Serialize a root element as a complete document
pub fn render_document(root: &Element, config: &SvgConfig) -> String {
    let mut svg = String::new();
    if config.xml_declaration {
        svg.push_str(XML_DECLARATION);
        if config.pretty_print {
            svg.push('\n');
        }
    }
    root.write_xml(&mut svg, 0, config.pretty_print);
    svg
}
