//! SVG path-data parser.
//!
//! Unlike `kurbo::BezPath::from_svg`, arcs are kept as arcs so that callers can choose
//! how finely to approximate them.

use kurbo::{CubicBez, Point, QuadBez, Vec2};

use crate::foundation::error::{VectorError, VectorResult};
use crate::geometry::segment::{ArcSegment, Segment};

const EPS: f64 = 1e-9;

struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    fn skip_separators(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if b.is_ascii_whitespace() || b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_separators();
        self.bytes.get(self.pos).copied()
    }

    fn at_number(&mut self) -> bool {
        matches!(self.peek(), Some(b'0'..=b'9' | b'.' | b'-' | b'+'))
    }

    fn error(&self, what: &str) -> VectorError {
        VectorError::config(format!(
            "malformed path data at byte {}: {what} in \"{}\"",
            self.pos, self.src
        ))
    }

    fn number(&mut self) -> VectorResult<f64> {
        self.skip_separators();
        let start = self.pos;
        let mut seen_dot = false;
        let mut seen_exp = false;
        if matches!(self.bytes.get(self.pos), Some(b'-' | b'+')) {
            self.pos += 1;
        }
        while let Some(&b) = self.bytes.get(self.pos) {
            match b {
                b'0'..=b'9' => self.pos += 1,
                b'.' if !seen_dot && !seen_exp => {
                    seen_dot = true;
                    self.pos += 1;
                }
                b'e' | b'E' if !seen_exp => {
                    seen_exp = true;
                    self.pos += 1;
                    if matches!(self.bytes.get(self.pos), Some(b'-' | b'+')) {
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
        self.src[start..self.pos]
            .parse()
            .map_err(|_| self.error("expected a number"))
    }

    fn point(&mut self) -> VectorResult<Point> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(Point::new(x, y))
    }

    fn flag(&mut self) -> VectorResult<bool> {
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                Ok(false)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(true)
            }
            _ => Err(self.error("expected an arc flag")),
        }
    }
}

/// Parse SVG path data into segments.
///
/// Supports `M L H V C S Q T A Z` in absolute and relative forms, implicit repeated
/// coordinates, and `Z` emitting a closing line when the subpath is not already closed.
/// Zero-radius arcs become lines; arcs ending where they start are dropped.
pub fn parse_path_data(d: &str) -> VectorResult<Vec<Segment>> {
    let mut lex = Lexer::new(d);
    let mut out = Vec::new();
    let mut cmd: Option<u8> = None;
    let mut current = Point::ZERO;
    let mut subpath_start = Point::ZERO;
    // Reflection sources for S and T.
    let mut last_cubic_ctrl: Option<Point> = None;
    let mut last_quad_ctrl: Option<Point> = None;

    while let Some(next) = lex.peek() {
        if next.is_ascii_alphabetic() {
            lex.pos += 1;
            cmd = Some(next);
        } else if !lex.at_number() {
            return Err(lex.error("unexpected character"));
        }
        let c = cmd.ok_or_else(|| lex.error("path data must start with a command"))?;
        let relative = c.is_ascii_lowercase();
        let base = if relative { current.to_vec2() } else { Vec2::ZERO };

        let mut cubic_ctrl = None;
        let mut quad_ctrl = None;
        match c.to_ascii_uppercase() {
            b'M' => {
                current = lex.point()? + base;
                subpath_start = current;
                // Further coordinate pairs are implicit line-to commands.
                cmd = Some(if relative { b'l' } else { b'L' });
            }
            b'L' => {
                let p = lex.point()? + base;
                out.push(Segment::line(current, p));
                current = p;
            }
            b'H' => {
                let x = lex.number()? + base.x;
                let p = Point::new(x, current.y);
                out.push(Segment::line(current, p));
                current = p;
            }
            b'V' => {
                let y = lex.number()? + base.y;
                let p = Point::new(current.x, y);
                out.push(Segment::line(current, p));
                current = p;
            }
            b'C' => {
                let p1 = lex.point()? + base;
                let p2 = lex.point()? + base;
                let p3 = lex.point()? + base;
                out.push(Segment::Cubic(CubicBez::new(current, p1, p2, p3)));
                cubic_ctrl = Some(p2);
                current = p3;
            }
            b'S' => {
                let p1 = match last_cubic_ctrl {
                    Some(prev) => current + (current - prev),
                    None => current,
                };
                let p2 = lex.point()? + base;
                let p3 = lex.point()? + base;
                out.push(Segment::Cubic(CubicBez::new(current, p1, p2, p3)));
                cubic_ctrl = Some(p2);
                current = p3;
            }
            b'Q' => {
                let p1 = lex.point()? + base;
                let p2 = lex.point()? + base;
                out.push(Segment::Quad(QuadBez::new(current, p1, p2)));
                quad_ctrl = Some(p1);
                current = p2;
            }
            b'T' => {
                let p1 = match last_quad_ctrl {
                    Some(prev) => current + (current - prev),
                    None => current,
                };
                let p2 = lex.point()? + base;
                out.push(Segment::Quad(QuadBez::new(current, p1, p2)));
                quad_ctrl = Some(p1);
                current = p2;
            }
            b'A' => {
                let rx = lex.number()?.abs();
                let ry = lex.number()?.abs();
                let rotation = lex.number()?;
                let large_arc = lex.flag()?;
                let sweep = lex.flag()?;
                let to = lex.point()? + base;
                if (to - current).hypot() > EPS {
                    if rx < EPS || ry < EPS {
                        out.push(Segment::line(current, to));
                    } else {
                        out.push(Segment::Arc(ArcSegment {
                            from: current,
                            to,
                            radii: Vec2::new(rx, ry),
                            x_rotation: rotation.to_radians(),
                            large_arc,
                            sweep,
                        }));
                    }
                }
                current = to;
            }
            b'Z' => {
                if (current - subpath_start).hypot() > EPS {
                    out.push(Segment::line(current, subpath_start));
                }
                current = subpath_start;
                // A number right after Z is not a valid implicit repetition.
                cmd = None;
            }
            _ => return Err(lex.error("unknown command")),
        }
        last_cubic_ctrl = cubic_ctrl;
        last_quad_ctrl = quad_ctrl;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/parse.rs"]
mod tests;
