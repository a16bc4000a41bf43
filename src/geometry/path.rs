use kurbo::{CubicBez, Point, Rect, Vec2};

use crate::foundation::error::{VectorError, VectorResult};
use crate::geometry::parse::parse_path_data;
use crate::geometry::segment::{Segment, fmt_point};
use crate::style::transform::TransformClause;

const EPS: f64 = 1e-9;

/// Ordered list of segments forming one or more subpaths.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse SVG path data.
    pub fn parse(d: &str) -> VectorResult<Self> {
        Ok(Self {
            segments: parse_path_data(d)?,
        })
    }

    /// Path from explicit segments.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Closed polygon through `points` (no duplicated first vertex needed).
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = Self::polyline(points);
        if let (Some(first), Some(last)) = (points.first(), points.last())
            && points.len() > 1
            && (*first - *last).hypot() > EPS
        {
            path.segments.push(Segment::line(*last, *first));
        }
        path
    }

    /// Open polyline through `points`.
    pub fn polyline(points: &[Point]) -> Self {
        Self {
            segments: points
                .windows(2)
                .map(|w| Segment::line(w[0], w[1]))
                .collect(),
        }
    }

    /// Segments in drawing order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append another path's segments.
    pub fn extend(&mut self, other: Path) {
        self.segments.extend(other.segments);
    }

    /// Tight bounding box; `None` for an empty path.
    pub fn bbox(&self) -> Option<Rect> {
        self.segments
            .iter()
            .map(Segment::bbox)
            .reduce(|a, b| a.union(b))
    }

    /// Bounding box after `clauses`; errors for empty paths or unsupported clauses.
    pub fn transformed_bbox(&self, clauses: &[TransformClause]) -> VectorResult<Rect> {
        self.apply_transforms(clauses)?
            .bbox()
            .ok_or_else(|| VectorError::geometry("bounding box of an empty path"))
    }

    /// Apply a transform chain the way SVG composes it (last clause first).
    ///
    /// Only `translate` and `scale` (about the origin) are supported.
    pub fn apply_transforms(&self, clauses: &[TransformClause]) -> VectorResult<Path> {
        let mut segments = self.segments.clone();
        for clause in clauses.iter().rev() {
            segments = match *clause {
                TransformClause::Translate(x, y) => {
                    let offset = Vec2::new(x, y);
                    segments.iter().map(|s| s.translated(offset)).collect()
                }
                TransformClause::Scale(x, y) => segments.iter().map(|s| s.scaled(x, y)).collect(),
                other => {
                    return Err(VectorError::unsupported(format!(
                        "{} transform in geometry queries",
                        other.name()
                    )));
                }
            };
        }
        Ok(Path { segments })
    }

    /// Path moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Path {
        Path {
            segments: self.segments.iter().map(|s| s.translated(offset)).collect(),
        }
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Whether every segment starts where the previous one ended.
    pub fn is_continuous(&self) -> bool {
        self.segments
            .windows(2)
            .all(|w| (w[0].end() - w[1].start()).hypot() <= EPS)
    }

    /// Whether the path ends where it starts.
    pub fn is_closed(&self) -> bool {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => (first.start() - last.end()).hypot() <= EPS,
            _ => false,
        }
    }

    /// Continuous runs of segments.
    pub fn subpaths(&self) -> Vec<Path> {
        let mut out: Vec<Path> = Vec::new();
        for seg in &self.segments {
            let starts_new = match out.last().and_then(|p| p.segments.last()) {
                Some(prev) => (prev.end() - seg.start()).hypot() > EPS,
                None => true,
            };
            if starts_new {
                out.push(Path::new());
            }
            if let Some(current) = out.last_mut() {
                current.segments.push(*seg);
            }
        }
        out
    }

    /// Prefix of the path covering `fraction` of its arc length.
    ///
    /// `fraction` is clamped to `[0, 1]`; the empty prefix is the empty path.
    pub fn partial(&self, fraction: f64) -> Path {
        let fraction = fraction.clamp(0.0, 1.0);
        if fraction >= 1.0 {
            return self.clone();
        }
        let mut left = self.length() * fraction;
        let mut segments = Vec::new();
        for seg in &self.segments {
            if left <= 0.0 {
                break;
            }
            let len = seg.length();
            if left >= len {
                segments.push(*seg);
                left -= len;
            } else {
                segments.extend(seg.prefix_by_length(left));
                left = 0.0;
            }
        }
        Path { segments }
    }

    /// All segments as cubics, arcs split into `arc_pieces` cubics each.
    pub fn to_cubics(&self, arc_pieces: usize) -> Vec<CubicBez> {
        self.segments
            .iter()
            .flat_map(|s| s.to_cubics(arc_pieces))
            .collect()
    }

    /// SVG path data. A move-to is emitted wherever a segment does not continue the previous one.
    pub fn to_svg_data(&self) -> String {
        let mut parts = Vec::with_capacity(self.segments.len() + 1);
        let mut cursor: Option<Point> = None;
        for seg in &self.segments {
            let joined = cursor.is_some_and(|p| (p - seg.start()).hypot() <= EPS);
            if !joined {
                parts.push(format!("M {}", fmt_point(seg.start())));
            }
            parts.push(seg.to_svg_command());
            cursor = Some(seg.end());
        }
        parts.join(" ")
    }
}

/// SVG path data for a run of cubics.
pub fn cubics_to_svg_data(cubics: &[CubicBez]) -> String {
    Path::from_segments(cubics.iter().copied().map(Segment::Cubic).collect()).to_svg_data()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
