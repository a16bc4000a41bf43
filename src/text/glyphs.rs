use anyhow::Context;
use kurbo::{CubicBez, Point, QuadBez, Rect};
use usvg::tiny_skia_path::PathSegment;

use crate::foundation::error::VectorResult;
use crate::geometry::path::Path;
use crate::geometry::segment::Segment;
use crate::text::{PathFragment, RenderedText};

/// Parse a typeset SVG document into path fragments.
///
/// `<use>`/`<defs>` references are expanded and nested transforms resolved by usvg.
/// Each fragment's path data carries the linear part of its transform; the translation
/// is reported separately as the fragment offset. Text elements are included through
/// their outlined form when fonts are available.
pub fn parse_glyph_document(svg: &str) -> VectorResult<RenderedText> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse glyph document")?;
    let size = tree.size();
    let mut fragments = Vec::new();
    collect(tree.root(), &mut fragments);
    tracing::debug!(fragments = fragments.len(), "glyph document parsed");
    Ok(RenderedText {
        view_box: Rect::new(0.0, 0.0, f64::from(size.width()), f64::from(size.height())),
        fragments,
    })
}

fn collect(group: &usvg::Group, out: &mut Vec<PathFragment>) {
    for node in group.children() {
        match node {
            usvg::Node::Group(g) => collect(g, out),
            usvg::Node::Path(p) => {
                if let Some(fragment) = fragment(p) {
                    out.push(fragment);
                }
            }
            usvg::Node::Text(t) => collect(t.flattened(), out),
            usvg::Node::Image(_) => {}
        }
    }
}

fn fragment(path: &usvg::Path) -> Option<PathFragment> {
    if !path.is_visible() {
        return None;
    }
    let ts = path.abs_transform();
    let map = |p: usvg::tiny_skia_path::Point| {
        let (x, y) = (f64::from(p.x), f64::from(p.y));
        Point::new(
            f64::from(ts.sx) * x + f64::from(ts.kx) * y,
            f64::from(ts.ky) * x + f64::from(ts.sy) * y,
        )
    };

    let mut segments = Vec::new();
    let mut cursor = Point::ZERO;
    let mut subpath_start = Point::ZERO;
    for seg in path.data().segments() {
        match seg {
            PathSegment::MoveTo(p) => {
                cursor = map(p);
                subpath_start = cursor;
            }
            PathSegment::LineTo(p) => {
                let p = map(p);
                segments.push(Segment::line(cursor, p));
                cursor = p;
            }
            PathSegment::QuadTo(c, p) => {
                let p = map(p);
                segments.push(Segment::Quad(QuadBez::new(cursor, map(c), p)));
                cursor = p;
            }
            PathSegment::CubicTo(c1, c2, p) => {
                let p = map(p);
                segments.push(Segment::Cubic(CubicBez::new(cursor, map(c1), map(c2), p)));
                cursor = p;
            }
            PathSegment::Close => {
                if cursor != subpath_start {
                    segments.push(Segment::line(cursor, subpath_start));
                }
                cursor = subpath_start;
            }
        }
    }
    if segments.is_empty() {
        return None;
    }
    Some(PathFragment {
        d: Path::from_segments(segments).to_svg_data(),
        offset: Point::new(f64::from(ts.tx), f64::from(ts.ty)),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/glyphs.rs"]
mod tests;
