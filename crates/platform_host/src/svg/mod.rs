//! SVG document inspection: inner markup extraction and asset metadata.

use roxmltree::{Document, Node, ParsingOptions};
use thiserror::Error;

const DEFAULT_EDGE: u32 = 512;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Why an SVG body could not be used.
pub enum SvgMarkupError {
    /// The body is not well-formed XML.
    #[error("SVG document could not be parsed: {0}")]
    Parse(String),
    /// The document has no `<svg>` element.
    #[error("document does not contain an SVG element")]
    MissingSvgElement,
}

/// Metadata extracted from one SVG asset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgAsset {
    /// viewBox width (or `width` attribute), defaulting to 512.
    pub width: u32,
    /// viewBox height (or `height` attribute), defaulting to 512.
    pub height: u32,
    /// `d` attribute of the first `<path>` in document order.
    pub first_path: Option<String>,
    /// Markup between the `<svg>` start and end tags.
    pub inner_markup: String,
}

fn parse_document(text: &str) -> Result<Document<'_>, SvgMarkupError> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    Document::parse_with_options(text, options).map_err(|err| SvgMarkupError::Parse(err.to_string()))
}

fn svg_root<'a, 'input>(doc: &'a Document<'input>) -> Result<Node<'a, 'input>, SvgMarkupError> {
    doc.descendants()
        .find(|node| node.is_element() && node.tag_name().name() == "svg")
        .ok_or(SvgMarkupError::MissingSvgElement)
}

fn inner_markup<'a>(text: &'a str, svg: Node<'_, '_>) -> &'a str {
    match (svg.first_child(), svg.last_child()) {
        (Some(first), Some(last)) => &text[first.range().start..last.range().end],
        _ => "",
    }
}

fn parse_length(raw: &str) -> Option<u32> {
    let trimmed = raw.trim().trim_end_matches("px");
    let value: f64 = trimmed.parse().ok()?;
    (value.is_finite() && value > 0.0).then(|| value.round() as u32)
}

fn view_box_size(svg: Node<'_, '_>) -> Option<(u32, u32)> {
    let raw = svg.attribute("viewBox")?;
    let parts: Vec<&str> = raw
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 4 {
        return None;
    }
    Some((parse_length(parts[2])?, parse_length(parts[3])?))
}

/// Returns the inner markup of the first `<svg>` element in `text`.
///
/// # Errors
///
/// Fails when the body is not XML or contains no `<svg>` element.
pub fn extract_svg_inner_markup(text: &str) -> Result<String, SvgMarkupError> {
    let doc = parse_document(text)?;
    let svg = svg_root(&doc)?;
    Ok(inner_markup(text, svg).trim().to_string())
}

/// Parses dimensions, the first path and the inner markup of an SVG asset.
///
/// # Errors
///
/// Fails when the body is not XML or contains no `<svg>` element.
pub fn parse_svg_asset(text: &str) -> Result<SvgAsset, SvgMarkupError> {
    let doc = parse_document(text)?;
    let svg = svg_root(&doc)?;
    let (width, height) = view_box_size(svg)
        .or_else(|| {
            let width = svg.attribute("width").and_then(parse_length)?;
            let height = svg.attribute("height").and_then(parse_length)?;
            Some((width, height))
        })
        .unwrap_or((DEFAULT_EDGE, DEFAULT_EDGE));
    let first_path = svg
        .descendants()
        .find(|node| node.is_element() && node.tag_name().name() == "path")
        .and_then(|node| node.attribute("d"))
        .map(str::to_string);

    Ok(SvgAsset {
        width,
        height,
        first_path,
        inner_markup: inner_markup(text, svg).trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const BELL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- icon asset -->
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 448 512"><path d="M224 0c-17.7 0-32 14.3-32 32z"/><path d="M1 1"/></svg>"#;

    #[test]
    fn extracts_markup_between_svg_tags() {
        assert_eq!(
            extract_svg_inner_markup(BELL).expect("inner markup"),
            r#"<path d="M224 0c-17.7 0-32 14.3-32 32z"/><path d="M1 1"/>"#
        );
    }

    #[test]
    fn parses_view_box_and_first_path() {
        let asset = parse_svg_asset(BELL).expect("asset");
        assert_eq!((asset.width, asset.height), (448, 512));
        assert_eq!(
            asset.first_path.as_deref(),
            Some("M224 0c-17.7 0-32 14.3-32 32z")
        );
    }

    #[test]
    fn falls_back_to_width_height_attributes_then_default() {
        let sized = parse_svg_asset(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24px" height="20"><g/></svg>"#,
        )
        .expect("sized");
        assert_eq!((sized.width, sized.height), (24, 20));
        assert_eq!(sized.first_path, None);

        let bare = parse_svg_asset(r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#).expect("bare");
        assert_eq!((bare.width, bare.height), (512, 512));
        assert_eq!(bare.inner_markup, "");
    }

    #[test]
    fn rejects_documents_without_svg_root() {
        assert_eq!(
            extract_svg_inner_markup("<html><body/></html>"),
            Err(SvgMarkupError::MissingSvgElement)
        );
        assert!(matches!(
            extract_svg_inner_markup("<svg"),
            Err(SvgMarkupError::Parse(_))
        ));
    }

    #[test]
    fn finds_nested_svg_elements() {
        let nested = r#"<div><svg viewBox="0,0,16,16"><circle r="4"/></svg></div>"#;
        let asset = parse_svg_asset(nested).expect("nested");
        assert_eq!((asset.width, asset.height), (16, 16));
        assert_eq!(asset.inner_markup, r#"<circle r="4"/>"#);
    }
}
