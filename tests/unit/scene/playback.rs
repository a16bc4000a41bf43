use super::*;
use crate::scene::SceneConfig;
use crate::shapes::Rectangle;
use crate::style::key::StyleMap;

fn playback(end: Time, fps: f64) -> Playback {
    Playback::new(Canvas::default(), 0.0, end, fps).unwrap()
}

#[test]
fn rejects_non_positive_fps() {
    assert!(Playback::new(Canvas::default(), 0.0, 1.0, 0.0).is_err());
    assert!(Playback::new(Canvas::default(), 0.0, 1.0, f64::NAN).is_err());
}

#[test]
fn advance_steps_by_frame_and_clamps_at_end() {
    let mut p = playback(1.0, 4.0);
    p.advance();
    assert_eq!(p.time(), 0.25);
    for _ in 0..10 {
        p.advance();
    }
    assert_eq!(p.time(), 1.0);
    assert_eq!(p.progress(), 1.0);
    p.restart();
    assert_eq!(p.time(), 0.0);
    assert_eq!(p.frame(), 0);
}

#[test]
fn paused_playback_does_not_move() {
    let mut p = playback(1.0, 4.0);
    p.toggle_pause();
    p.advance();
    assert!(p.is_paused());
    assert_eq!(p.time(), 0.0);
    p.toggle_pause();
    p.advance();
    assert_eq!(p.time(), 0.25);
}

#[test]
fn zoom_keeps_relative_point_fixed() {
    let mut p = playback(1.0, 30.0);
    p.zoom(0.25, 0.5, 2.0).unwrap();
    assert_eq!(p.view_box(), Rect::new(125.0, 250.0, 625.0, 750.0));
    assert_eq!(p.view_point(0.25, 0.5), Point::new(250.0, 500.0));

    p.zoom(7.0, -3.0, 0.5).unwrap();
    assert_eq!(p.view_box(), Rect::new(-375.0, 250.0, 625.0, 1250.0));

    assert!(p.zoom(0.5, 0.5, 0.0).is_err());
    p.reset_view();
    assert_eq!(p.view_box(), Canvas::default().view_box());
}

#[test]
fn wheel_factor_is_multiplicative() {
    assert_eq!(Playback::wheel_factor(0.0), 1.0);
    assert!((Playback::wheel_factor(240.0) - 1.2).abs() < 1e-12);
    let round_trip = Playback::wheel_factor(120.0) * Playback::wheel_factor(-120.0);
    assert!((round_trip - 1.0).abs() < 1e-12);
}

#[test]
fn frames_cover_the_range_inclusively() {
    let times: Vec<Time> = playback(1.0, 4.0).frames().collect();
    assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

    let uneven: Vec<Time> = Playback::new(Canvas::default(), 0.0, 0.5, 3.0)
        .unwrap()
        .frames()
        .collect();
    assert_eq!(uneven.len(), 3);
    assert_eq!(uneven.last(), Some(&0.5));

    let single: Vec<Time> = playback(0.0, 4.0).frames().collect();
    assert_eq!(single, vec![0.0]);
}

#[test]
fn scene_playback_counts_back_from_end() {
    let mut scene = Scene::new(SceneConfig::default());
    let r = Rectangle::new(1.0, 1.0, Point::ZERO, 0.0, &StyleMap::new());
    r.x.move_to(0.0, 4.0, 10.0, true, crate::animation::ease::Ease::Linear);
    scene.add(r);

    let p = Playback::for_scene(&scene, -1.5, 10.0).unwrap();
    assert_eq!((p.start(), p.end()), (2.5, 4.0));
    assert!(p.render(&scene).contains("<rect x='6.25'"));

    let p = Playback::for_scene(&scene, -10.0, 10.0).unwrap();
    assert_eq!(p.start(), 0.0);
}
