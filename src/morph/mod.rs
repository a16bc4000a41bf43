//! Shape morphing: subpath matching, segment equalization and per-segment interpolation.
//!
//! A [`MorphPlan`] is computed once for a pair of path lists and then queried for any
//! progress value in `[0, 1]`.

use kurbo::{CubicBez, ParamCurve, ParamCurveArclen, Point};
use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::foundation::core::Time;
use crate::foundation::error::VectorResult;
use crate::geometry::path::{Path, cubics_to_svg_data};
use crate::geometry::segment::DEFAULT_ARC_PIECES;
use crate::style::styling::Styling;

/// How subpaths of the two sides are paired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBy {
    /// Closest transformed bounding-box centers.
    #[default]
    Distance,
    /// Most similar arc lengths.
    Length,
}

/// Morph preparation options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphOpts {
    /// Subpath pairing criterion.
    pub match_by: MatchBy,
    /// Cubic pieces per arc segment.
    pub arc_subdivisions: usize,
}

impl Default for MorphOpts {
    fn default() -> Self {
        Self {
            match_by: MatchBy::Distance,
            arc_subdivisions: DEFAULT_ARC_PIECES,
        }
    }
}

/// One morphing subpath: paired cubic segments plus both end stylings.
#[derive(Clone, Debug)]
pub struct SubpathMorph {
    pairs: Vec<(CubicBez, CubicBez)>,
    /// Styling of the source side.
    pub styling_from: Styling,
    /// Styling of the target side.
    pub styling_to: Styling,
}

impl SubpathMorph {
    /// Number of paired segments.
    pub fn segment_count(&self) -> usize {
        self.pairs.len()
    }

    /// Interpolated cubics at `progress` in `[0, 1]`.
    ///
    /// Every control point moves independently along a straight line.
    pub fn cubics_at(&self, progress: f64, ease: Ease) -> Vec<CubicBez> {
        let e = ease.apply(progress);
        let mix = |a: Point, b: Point| a.lerp(b, e);
        self.pairs
            .iter()
            .map(|(a, b)| {
                CubicBez::new(
                    mix(a.p0, b.p0),
                    mix(a.p1, b.p1),
                    mix(a.p2, b.p2),
                    mix(a.p3, b.p3),
                )
            })
            .collect()
    }

    /// SVG path data at `progress`.
    pub fn path_data(&self, progress: f64, ease: Ease) -> String {
        cubics_to_svg_data(&self.cubics_at(progress, ease))
    }
}

/// Precomputed correspondence between two lists of styled paths.
#[derive(Clone, Debug)]
pub struct MorphPlan {
    /// Morphing subpaths, unmatched ones first within each partition.
    pub subpaths: Vec<SubpathMorph>,
}

type Styled<'a> = (&'a Path, &'a Styling);

impl MorphPlan {
    /// Match subpaths of `from` (as seen at `start`) with those of `to` (at `end`).
    ///
    /// Paths are partitioned into open and closed ones (a path is closed when it is
    /// continuous and ends where it starts); each partition is matched greedily on the
    /// cost chosen by `opts.match_by`. Leftover paths morph from or into nothing.
    #[tracing::instrument(skip(from, to), fields(from = from.len(), to = to.len()))]
    pub fn prepare(
        from: &[(Path, Styling)],
        to: &[(Path, Styling)],
        start: Time,
        end: Time,
        opts: MorphOpts,
    ) -> VectorResult<Self> {
        let (open_from, closed_from) = partition(from);
        let (open_to, closed_to) = partition(to);

        let mut matched: Vec<((Path, Styling), (Path, Styling))> = Vec::new();
        for (a, b) in [(open_from, open_to), (closed_from, closed_to)] {
            let costs = cost_matrix(&a, &b, start, end, opts.match_by)?;
            let pairs = greedy_pairs(costs, a.len(), b.len());
            let owned = |(p, s): Styled<'_>| (p.clone(), s.clone());
            if a.len() >= b.len() {
                for i in (0..a.len()).filter(|i| !pairs.iter().any(|(pi, _)| pi == i)) {
                    let styling = a[i].1.clone();
                    matched.push((owned(a[i]), (Path::new(), styling)));
                }
            } else {
                for j in (0..b.len()).filter(|j| !pairs.iter().any(|(_, pj)| pj == j)) {
                    let styling = b[j].1.clone();
                    matched.push(((Path::new(), styling), owned(b[j])));
                }
            }
            for (i, j) in pairs {
                matched.push((owned(a[i]), owned(b[j])));
            }
        }

        let subpaths: Vec<SubpathMorph> = matched
            .into_iter()
            .map(|((path_from, styling_from), (path_to, styling_to))| SubpathMorph {
                pairs: pair_segments(&path_from, &path_to, opts.arc_subdivisions),
                styling_from,
                styling_to,
            })
            .collect();
        tracing::debug!(subpaths = subpaths.len(), "morph plan prepared");
        Ok(Self { subpaths })
    }
}

fn partition(items: &[(Path, Styling)]) -> (Vec<Styled<'_>>, Vec<Styled<'_>>) {
    let mut open = Vec::new();
    let mut closed = Vec::new();
    for (path, styling) in items {
        if path.is_continuous() && path.is_closed() {
            closed.push((path, styling));
        } else {
            open.push((path, styling));
        }
    }
    (open, closed)
}

fn center(path: &Path, styling: &Styling, time: Time) -> VectorResult<Option<Point>> {
    if path.is_empty() {
        return Ok(None);
    }
    Ok(Some(
        path.transformed_bbox(&styling.transform_clauses(time))?
            .center(),
    ))
}

fn cost_matrix(
    a: &[Styled<'_>],
    b: &[Styled<'_>],
    start: Time,
    end: Time,
    match_by: MatchBy,
) -> VectorResult<Vec<Vec<f64>>> {
    match match_by {
        MatchBy::Distance => {
            let ca = a
                .iter()
                .map(|(p, s)| center(p, s, start))
                .collect::<VectorResult<Vec<_>>>()?;
            let cb = b
                .iter()
                .map(|(p, s)| center(p, s, end))
                .collect::<VectorResult<Vec<_>>>()?;
            Ok(ca
                .iter()
                .map(|pa| {
                    cb.iter()
                        .map(|pb| match (pa, pb) {
                            (Some(pa), Some(pb)) => pa.distance(*pb),
                            _ => f64::INFINITY,
                        })
                        .collect()
                })
                .collect())
        }
        MatchBy::Length => {
            let la: Vec<f64> = a.iter().map(|(p, _)| p.length()).collect();
            let lb: Vec<f64> = b.iter().map(|(p, _)| p.length()).collect();
            Ok(la
                .iter()
                .map(|&x| {
                    lb.iter().map(|&y| length_ratio_cost(x, y)).collect()
                })
                .collect())
        }
    }
}

fn length_ratio_cost(a: f64, b: f64) -> f64 {
    if b > 0.0 {
        (a / b - 1.0).abs()
    } else if a > 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}

/// Repeatedly take the smallest remaining cost (first in row-major order on ties),
/// then retire its row and column.
fn greedy_pairs(costs: Vec<Vec<f64>>, rows: usize, cols: usize) -> Vec<(usize, usize)> {
    let mut row_used = vec![false; rows];
    let mut col_used = vec![false; cols];
    let mut out = Vec::with_capacity(rows.min(cols));
    for _ in 0..rows.min(cols) {
        let mut best: Option<(usize, usize, f64)> = None;
        for (i, row) in costs.iter().enumerate() {
            if row_used[i] {
                continue;
            }
            for (j, &c) in row.iter().enumerate() {
                if col_used[j] {
                    continue;
                }
                let c = if c.is_nan() { f64::INFINITY } else { c };
                if best.is_none_or(|(_, _, b)| c < b) {
                    best = Some((i, j, c));
                }
            }
        }
        let Some((i, j, _)) = best else { break };
        row_used[i] = true;
        col_used[j] = true;
        out.push((i, j));
    }
    out
}

fn pair_segments(from: &Path, to: &Path, arc_pieces: usize) -> Vec<(CubicBez, CubicBez)> {
    let mut a = from.to_cubics(arc_pieces);
    let mut b = to.to_cubics(arc_pieces);
    if a.is_empty() && b.is_empty() {
        return Vec::new();
    }
    if a.is_empty() {
        let c = collapse_point(to);
        return b.into_iter().map(|seg| (c, seg)).collect();
    }
    if b.is_empty() {
        let c = collapse_point(from);
        return a.into_iter().map(|seg| (seg, c)).collect();
    }
    while a.len() < b.len() {
        bisect_longest(&mut a);
    }
    while b.len() < a.len() {
        bisect_longest(&mut b);
    }
    a.into_iter().zip(b).collect()
}

/// Degenerate cubic sitting at the center of `path`'s bounding box.
fn collapse_point(path: &Path) -> CubicBez {
    let c = path.bbox().map(|r| r.center()).unwrap_or(Point::ZERO);
    CubicBez::new(c, c, c, c)
}

fn bisect_longest(segs: &mut Vec<CubicBez>) {
    let mut longest = 0;
    let mut longest_len = f64::NEG_INFINITY;
    for (i, seg) in segs.iter().enumerate() {
        let len = seg.arclen(1e-6);
        if len > longest_len {
            longest = i;
            longest_len = len;
        }
    }
    let (left, right) = segs[longest].subdivide();
    segs.splice(longest..=longest, [left, right]);
}

#[cfg(test)]
#[path = "../../tests/unit/morph/mod.rs"]
mod tests;
