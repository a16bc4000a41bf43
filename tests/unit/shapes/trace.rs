use super::*;
use crate::animation::attribute::Span;

fn moving_point() -> Attribute<Point> {
    let p = Attribute::new(0.0, Point::ZERO);
    p.set(Span::new(0.0, 10.0).hold(), |t| Point::new(t * 10.0, 0.0));
    p
}

#[test]
fn rejects_non_positive_step() {
    let p = moving_point();
    assert!(matches!(
        Trace::new(&p, 0.0, None, 0.0, &StyleMap::new()),
        Err(VectorError::Config(_))
    ));
    assert!(Trace::new(&p, 0.0, None, f64::NAN, &StyleMap::new()).is_err());
}

#[test]
fn earlier_output_is_a_prefix_of_later_output() {
    let trace = Trace::new(&moving_point(), 0.0, None, 0.5, &StyleMap::new()).unwrap();
    let late = trace.vertices(3.0);
    let early = trace.vertices(1.2);
    assert_eq!(late.len(), 6);
    assert_eq!(early.len(), 2);
    assert_eq!(&late[..early.len()], &early[..]);
    assert_eq!(late[3], Point::new(15.0, 0.0));
}

#[test]
fn samples_are_not_recomputed() {
    let p = moving_point();
    let trace = Trace::new(&p, 0.0, None, 1.0, &StyleMap::new()).unwrap();
    let before = trace.vertices(3.0);
    p.set_from(0.0, Point::new(-1.0, -1.0));
    assert_eq!(trace.vertices(3.0), before);
    assert_eq!(trace.vertices(4.0)[3], Point::new(-1.0, -1.0));
}

#[test]
fn end_caps_the_sampling() {
    let trace = Trace::new(&moving_point(), 1.0, Some(2.0), 0.25, &StyleMap::new()).unwrap();
    assert_eq!(trace.steps(0.5), 0);
    assert_eq!(trace.steps(1.5), 2);
    assert_eq!(trace.steps(9.0), 4);
}

#[test]
fn markup_is_empty_before_first_step() {
    let trace = Trace::new(&moving_point(), 0.0, None, 1.0, &StyleMap::new()).unwrap();
    assert_eq!(trace.to_markup(0.5), "");
    assert_eq!(
        trace.to_markup(2.5),
        "<polyline points='0,0 10,0 25,0' stroke='rgb(255,255,255)' stroke-width='3' />"
    );
}

#[test]
fn shifting_is_unsupported() {
    let trace = Trace::new(&moving_point(), 0.0, None, 1.0, &StyleMap::new()).unwrap();
    assert!(matches!(
        trace.shift(1.0, 1.0, 0.0, None, Ease::Linear),
        Err(VectorError::Unsupported(_))
    ));
}

#[test]
fn polygon_snapshot_shares_styling() {
    let trace = Trace::new(&moving_point(), 0.0, None, 1.0, &StyleMap::new()).unwrap();
    trace.z.set_from(0.0, 4.0);
    let polygon = trace.to_polygon(3.0);
    assert_eq!(polygon.points(3.0).len(), 3);
    assert_eq!(polygon.z.at(3.0), 4.0);
    trace.styling.stroke_width.set_from(5.0, 7.0);
    assert_eq!(polygon.styling.stroke_width.at(6.0), 7.0);
}
