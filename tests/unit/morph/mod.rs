use super::*;

fn styled(points: &[(f64, f64)]) -> (Path, Styling) {
    let pts: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
    (Path::polygon(&pts), Styling::defaults(0.0))
}

fn open_line(x0: f64, x1: f64, y: f64) -> (Path, Styling) {
    (
        Path::polyline(&[Point::new(x0, y), Point::new(x1, y)]),
        Styling::defaults(0.0),
    )
}

fn data(path: &Path) -> String {
    cubics_to_svg_data(&path.to_cubics(DEFAULT_ARC_PIECES))
}

#[test]
fn endpoints_are_exact_and_motion_is_monotonic() {
    let a = styled(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
    let b = styled(&[(20.0, 20.0), (30.0, 20.0), (20.0, 30.0)]);
    let plan = MorphPlan::prepare(
        std::slice::from_ref(&a),
        std::slice::from_ref(&b),
        0.0,
        1.0,
        MorphOpts::default(),
    )
    .unwrap();
    assert_eq!(plan.subpaths.len(), 1);
    let sub = &plan.subpaths[0];
    assert_eq!(sub.segment_count(), 3);
    assert_eq!(sub.path_data(0.0, Ease::Smooth), data(&a.0));
    assert_eq!(sub.path_data(1.0, Ease::Smooth), data(&b.0));

    let origin = sub.cubics_at(0.0, Ease::Smooth)[0].p0;
    let mut last = 0.0;
    for k in 1..=10 {
        let d = sub.cubics_at(f64::from(k) / 10.0, Ease::Smooth)[0]
            .p0
            .distance(origin);
        assert!(d >= last, "step {k} moved backwards");
        last = d;
    }
}

#[test]
fn segment_counts_are_equalized() {
    let square = styled(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let tri = styled(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
    let plan = MorphPlan::prepare(&[tri], &[square], 0.0, 1.0, MorphOpts::default()).unwrap();
    assert_eq!(plan.subpaths[0].segment_count(), 4);
    // The hypotenuse is the longest edge and is the one bisected.
    let start = plan.subpaths[0].cubics_at(0.0, Ease::Linear);
    assert_eq!(start[1].p3, Point::new(5.0, 5.0));
}

#[test]
fn unmatched_paths_collapse_to_their_center() {
    let near = styled(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
    let far = styled(&[(100.0, 100.0), (110.0, 100.0), (100.0, 110.0)]);
    let target = styled(&[(2.0, 2.0), (12.0, 2.0), (2.0, 12.0)]);
    let plan = MorphPlan::prepare(
        &[near, far.clone()],
        &[target],
        0.0,
        1.0,
        MorphOpts::default(),
    )
    .unwrap();
    assert_eq!(plan.subpaths.len(), 2);

    let dying = &plan.subpaths[0];
    assert_eq!(dying.path_data(0.0, Ease::Linear), data(&far.0));
    let center = Point::new(105.0, 105.0);
    for c in dying.cubics_at(1.0, Ease::Linear) {
        for p in [c.p0, c.p1, c.p2, c.p3] {
            assert!(p.distance(center) < 1e-9);
        }
    }
}

#[test]
fn open_paths_are_matched_before_closed_ones() {
    let plan = MorphPlan::prepare(
        &[styled(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]), open_line(0.0, 5.0, 0.0)],
        &[styled(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]), open_line(0.0, 7.0, 1.0)],
        0.0,
        1.0,
        MorphOpts::default(),
    )
    .unwrap();
    assert_eq!(plan.subpaths.len(), 2);
    assert_eq!(plan.subpaths[0].segment_count(), 1);
    assert_eq!(plan.subpaths[1].segment_count(), 3);
}

#[test]
fn length_matching_pairs_similar_lengths() {
    let opts = MorphOpts {
        match_by: MatchBy::Length,
        ..MorphOpts::default()
    };
    let from = [open_line(0.0, 10.0, 0.0), open_line(0.0, 20.0, 5.0)];
    let to = [open_line(0.0, 21.0, 50.0), open_line(0.0, 9.0, 60.0)];
    let plan = MorphPlan::prepare(&from, &to, 0.0, 1.0, opts).unwrap();
    // Cheapest pair first: 20 -> 21, then 10 -> 9.
    assert_eq!(plan.subpaths[0].path_data(0.0, Ease::Linear), data(&from[1].0));
    assert_eq!(plan.subpaths[0].path_data(1.0, Ease::Linear), data(&to[0].0));
    assert_eq!(plan.subpaths[1].path_data(1.0, Ease::Linear), data(&to[1].0));
}

#[test]
fn greedy_ties_resolve_row_major() {
    let pairs = greedy_pairs(vec![vec![1.0, 1.0], vec![1.0, 1.0]], 2, 2);
    assert_eq!(pairs, vec![(0, 0), (1, 1)]);
    let pairs = greedy_pairs(vec![vec![5.0], vec![1.0], vec![3.0]], 3, 1);
    assert_eq!(pairs, vec![(1, 0)]);
}

#[test]
fn empty_to_empty_yields_no_segments() {
    let plan = MorphPlan::prepare(
        &[(Path::new(), Styling::defaults(0.0))],
        &[(Path::new(), Styling::defaults(0.0))],
        0.0,
        1.0,
        MorphOpts::default(),
    )
    .unwrap();
    assert_eq!(plan.subpaths.len(), 1);
    assert_eq!(plan.subpaths[0].path_data(0.5, Ease::Linear), "");
}

#[test]
fn single_path_shrinks_into_its_center_when_deleted() {
    let tri = styled(&[(0.0, 0.0), (30.0, 0.0), (0.0, 30.0)]);
    let plan = MorphPlan::prepare(
        std::slice::from_ref(&tri),
        &[],
        0.0,
        1.0,
        MorphOpts::default(),
    )
    .unwrap();
    assert_eq!(plan.subpaths.len(), 1);
    let sub = &plan.subpaths[0];
    assert_eq!(sub.segment_count(), 3);
    assert_eq!(sub.path_data(0.0, Ease::Smooth), data(&tri.0));

    let center = Point::new(15.0, 15.0);
    for c in sub.cubics_at(1.0, Ease::Smooth) {
        for p in [c.p0, c.p1, c.p2, c.p3] {
            assert!(p.distance(center) < 1e-9);
        }
    }
}

#[test]
fn single_path_grows_from_its_center_when_created() {
    let tri = styled(&[(0.0, 0.0), (30.0, 0.0), (0.0, 30.0)]);
    let plan = MorphPlan::prepare(
        &[],
        std::slice::from_ref(&tri),
        0.0,
        1.0,
        MorphOpts::default(),
    )
    .unwrap();
    assert_eq!(plan.subpaths.len(), 1);
    let sub = &plan.subpaths[0];
    assert_eq!(sub.path_data(1.0, Ease::Smooth), data(&tri.0));

    let center = Point::new(15.0, 15.0);
    for c in sub.cubics_at(0.0, Ease::Smooth) {
        for p in [c.p0, c.p1, c.p2, c.p3] {
            assert!(p.distance(center) < 1e-9);
        }
    }
}
