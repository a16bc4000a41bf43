use kurbo::{
    Affine, Arc, CubicBez, Ellipse, Line, ParamCurve, ParamCurveArclen, ParamCurveExtrema, Point, QuadBez,
    Rect, SvgArc, Vec2,
};

/// Pieces used when an arc has to be measured or flattened without a caller preference.
pub const DEFAULT_ARC_PIECES: usize = 10;

const ARCLEN_ACCURACY: f64 = 1e-6;

/// One drawing primitive of a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// Straight line.
    Line(Line),
    /// Quadratic Bézier.
    Quad(QuadBez),
    /// Cubic Bézier.
    Cubic(CubicBez),
    /// Elliptical arc in SVG endpoint parameterization.
    Arc(ArcSegment),
}

/// Elliptical arc as written in path data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Radii (non-negative).
    pub radii: Vec2,
    /// Ellipse rotation in radians.
    pub x_rotation: f64,
    /// Large-arc flag.
    pub large_arc: bool,
    /// Sweep flag.
    pub sweep: bool,
}

impl ArcSegment {
    /// Center parameterization; `None` for degenerate arcs.
    pub fn to_arc(&self) -> Option<Arc> {
        Arc::from_svg_arc(&SvgArc {
            from: self.from,
            to: self.to,
            radii: self.radii,
            x_rotation: self.x_rotation,
            large_arc: self.large_arc,
            sweep: self.sweep,
        })
    }
}

impl Segment {
    /// Straight line between two points.
    pub fn line(p0: Point, p1: Point) -> Self {
        Segment::Line(Line::new(p0, p1))
    }

    /// First point.
    pub fn start(&self) -> Point {
        match self {
            Segment::Line(l) => l.p0,
            Segment::Quad(q) => q.p0,
            Segment::Cubic(c) => c.p0,
            Segment::Arc(a) => a.from,
        }
    }

    /// Last point.
    pub fn end(&self) -> Point {
        match self {
            Segment::Line(l) => l.p1,
            Segment::Quad(q) => q.p2,
            Segment::Cubic(c) => c.p3,
            Segment::Arc(a) => a.to,
        }
    }

    /// Cubic form of this segment; arcs become `arc_pieces` cubics.
    ///
    /// Lines keep their endpoints as control points, quadratics are degree elevated and
    /// degenerate arcs (zero radius) collapse to a line.
    pub fn to_cubics(&self, arc_pieces: usize) -> Vec<CubicBez> {
        match self {
            Segment::Line(l) => vec![CubicBez::new(l.p0, l.p0, l.p1, l.p1)],
            Segment::Quad(q) => vec![q.raise()],
            Segment::Cubic(c) => vec![*c],
            Segment::Arc(a) => arc_to_cubics(a, arc_pieces),
        }
    }

    /// Point at parameter `t` in `[0, 1]`.
    pub fn eval(&self, t: f64) -> Point {
        match self {
            Segment::Line(l) => l.eval(t),
            Segment::Quad(q) => q.eval(t),
            Segment::Cubic(c) => c.eval(t),
            Segment::Arc(a) => match a.to_arc() {
                Some(arc) => arc_point(&arc, arc.start_angle + arc.sweep_angle * t),
                None => Line::new(a.from, a.to).eval(t),
            },
        }
    }

    /// Arc length.
    pub fn length(&self) -> f64 {
        match self {
            Segment::Line(l) => l.arclen(ARCLEN_ACCURACY),
            Segment::Quad(q) => q.arclen(ARCLEN_ACCURACY),
            Segment::Cubic(c) => c.arclen(ARCLEN_ACCURACY),
            Segment::Arc(_) => self
                .to_cubics(DEFAULT_ARC_PIECES)
                .iter()
                .map(|c| c.arclen(ARCLEN_ACCURACY))
                .sum(),
        }
    }

    /// Tight bounding box.
    pub fn bbox(&self) -> Rect {
        match self {
            Segment::Line(l) => l.bounding_box(),
            Segment::Quad(q) => q.bounding_box(),
            Segment::Cubic(c) => c.bounding_box(),
            Segment::Arc(_) => {
                let cubics = self.to_cubics(DEFAULT_ARC_PIECES);
                let mut bbox = Rect::from_points(self.start(), self.end());
                for c in &cubics {
                    bbox = bbox.union(c.bounding_box());
                }
                bbox
            }
        }
    }

    /// Split at parameter `t`, returning the pieces before and after.
    pub fn split(&self, t: f64) -> (Segment, Segment) {
        match self {
            Segment::Line(l) => (
                Segment::Line(l.subsegment(0.0..t)),
                Segment::Line(l.subsegment(t..1.0)),
            ),
            Segment::Quad(q) => (
                Segment::Quad(q.subsegment(0.0..t)),
                Segment::Quad(q.subsegment(t..1.0)),
            ),
            Segment::Cubic(c) => (
                Segment::Cubic(c.subsegment(0.0..t)),
                Segment::Cubic(c.subsegment(t..1.0)),
            ),
            Segment::Arc(a) => match a.to_arc() {
                Some(arc) => {
                    let mid = arc_point(&arc, arc.start_angle + arc.sweep_angle * t);
                    let first = ArcSegment {
                        to: mid,
                        large_arc: (arc.sweep_angle * t).abs() > std::f64::consts::PI,
                        ..*a
                    };
                    let second = ArcSegment {
                        from: mid,
                        large_arc: (arc.sweep_angle * (1.0 - t)).abs() > std::f64::consts::PI,
                        ..*a
                    };
                    (Segment::Arc(first), Segment::Arc(second))
                }
                None => Segment::line(a.from, a.to).split(t),
            },
        }
    }

    /// Prefix of the segment covering `len` units of arc length.
    pub(crate) fn prefix_by_length(&self, len: f64) -> Vec<Segment> {
        match self {
            Segment::Line(l) => {
                let t = l.inv_arclen(len, ARCLEN_ACCURACY);
                vec![Segment::Line(l.subsegment(0.0..t))]
            }
            Segment::Quad(q) => {
                let t = q.inv_arclen(len, ARCLEN_ACCURACY);
                vec![Segment::Quad(q.subsegment(0.0..t))]
            }
            Segment::Cubic(c) => {
                let t = c.inv_arclen(len, ARCLEN_ACCURACY);
                vec![Segment::Cubic(c.subsegment(0.0..t))]
            }
            Segment::Arc(_) => {
                let mut out = Vec::new();
                let mut left = len;
                for c in self.to_cubics(DEFAULT_ARC_PIECES) {
                    let l = c.arclen(ARCLEN_ACCURACY);
                    if left >= l {
                        out.push(Segment::Cubic(c));
                        left -= l;
                    } else {
                        if left > 0.0 {
                            out.extend(Segment::Cubic(c).prefix_by_length(left));
                        }
                        break;
                    }
                }
                out
            }
        }
    }

    /// Segment moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Segment {
        match self {
            Segment::Arc(a) => Segment::Arc(ArcSegment {
                from: a.from + offset,
                to: a.to + offset,
                ..*a
            }),
            _ => self.transformed(Affine::translate(offset)),
        }
    }

    /// Segment scaled about the origin.
    ///
    /// Arcs keep their underlying ellipse: a rotated arc under a non-uniform scale gets
    /// new radii and rotation. A mirroring scale flips the sweep direction.
    pub fn scaled(&self, sx: f64, sy: f64) -> Segment {
        match self {
            Segment::Arc(a) => {
                let affine = Affine::scale_non_uniform(sx, sy);
                let (radii, x_rotation) = match a.to_arc() {
                    Some(arc) if a.x_rotation != 0.0 && sx.abs() != sy.abs() => {
                        let ellipse = affine * Ellipse::new(arc.center, arc.radii, arc.x_rotation);
                        let (radii, rotation) = ellipse.radii_and_rotation();
                        (Vec2::new(radii.x.abs(), radii.y.abs()), rotation)
                    }
                    _ => (
                        Vec2::new(a.radii.x * sx.abs(), a.radii.y * sy.abs()),
                        a.x_rotation,
                    ),
                };
                Segment::Arc(ArcSegment {
                    from: affine * a.from,
                    to: affine * a.to,
                    radii,
                    x_rotation,
                    large_arc: a.large_arc,
                    sweep: if sx * sy < 0.0 { !a.sweep } else { a.sweep },
                })
            }
            _ => self.transformed(Affine::scale_non_uniform(sx, sy)),
        }
    }

    fn transformed(&self, affine: Affine) -> Segment {
        match self {
            Segment::Line(l) => Segment::Line(affine * *l),
            Segment::Quad(q) => Segment::Quad(affine * *q),
            Segment::Cubic(c) => Segment::Cubic(affine * *c),
            Segment::Arc(a) => Segment::Arc(ArcSegment {
                from: affine * a.from,
                to: affine * a.to,
                ..*a
            }),
        }
    }

    /// SVG command for this segment without the leading move-to.
    pub fn to_svg_command(&self) -> String {
        match self {
            Segment::Line(l) => format!("L {}", fmt_point(l.p1)),
            Segment::Quad(q) => format!("Q {} {}", fmt_point(q.p1), fmt_point(q.p2)),
            Segment::Cubic(c) => format!(
                "C {} {} {}",
                fmt_point(c.p1),
                fmt_point(c.p2),
                fmt_point(c.p3)
            ),
            Segment::Arc(a) => format!(
                "A {},{} {} {},{} {}",
                a.radii.x,
                a.radii.y,
                a.x_rotation.to_degrees(),
                u8::from(a.large_arc),
                u8::from(a.sweep),
                fmt_point(a.to)
            ),
        }
    }
}

pub(crate) fn fmt_point(p: Point) -> String {
    format!("{},{}", p.x, p.y)
}

fn arc_point(arc: &Arc, angle: f64) -> Point {
    let local = Vec2::new(arc.radii.x * angle.cos(), arc.radii.y * angle.sin());
    arc.center + rotate(local, arc.x_rotation)
}

fn arc_tangent(arc: &Arc, angle: f64) -> Vec2 {
    let local = Vec2::new(-arc.radii.x * angle.sin(), arc.radii.y * angle.cos());
    rotate(local, arc.x_rotation)
}

fn rotate(v: Vec2, angle: f64) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

fn arc_to_cubics(svg: &ArcSegment, pieces: usize) -> Vec<CubicBez> {
    let Some(arc) = svg.to_arc() else {
        return Segment::line(svg.from, svg.to).to_cubics(1);
    };
    let n = pieces.max(1);
    let step = arc.sweep_angle / n as f64;
    let k = 4.0 / 3.0 * (step / 4.0).tan();
    (0..n)
        .map(|i| {
            let a0 = arc.start_angle + step * i as f64;
            let a1 = a0 + step;
            let p0 = if i == 0 { svg.from } else { arc_point(&arc, a0) };
            let p3 = if i + 1 == n { svg.to } else { arc_point(&arc, a1) };
            CubicBez::new(
                p0,
                p0 + arc_tangent(&arc, a0) * k,
                p3 - arc_tangent(&arc, a1) * k,
                p3,
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/segment.rs"]
mod tests;
