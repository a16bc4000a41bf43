use super::*;
use crate::animation::ease::Ease;
use crate::shapes::{Circle, ShapeExt};

fn scene() -> Scene {
    Scene::new(SceneConfig {
        canvas: Canvas {
            width: 200.0,
            height: 100.0,
        },
        ..SceneConfig::default()
    })
}

fn square(x: f64) -> Rectangle {
    Rectangle::new(10.0, 10.0, Point::new(x, 0.0), 0.0, &StyleMap::new())
}

#[test]
fn empty_frame_is_header_and_footer() {
    assert_eq!(
        scene().frame(0.0),
        "<?xml version='1.0' encoding='UTF-8'?>\n\
         <svg version='1.1' xmlns='http://www.w3.org/2000/svg' \
         xmlns:xlink='http://www.w3.org/1999/xlink' width='200' height='100' \
         viewBox='0 0 200 100'>\n</svg>"
    );
}

#[test]
fn frame_lists_visible_shapes_by_z() {
    let mut s = scene();
    s.add(square(1.0).with_z(2.0));
    let hidden = square(2.0);
    hidden.show.set_from(1.0, false);
    s.add(hidden);
    s.add(square(3.0));

    let body: Vec<String> = s
        .frame(1.0)
        .lines()
        .filter(|l| l.starts_with("<rect"))
        .map(str::to_owned)
        .collect();
    assert_eq!(body.len(), 2);
    assert!(body[0].starts_with("<rect x='3'"));
    assert!(body[1].starts_with("<rect x='1'"));
    assert_eq!(s.frame(0.0).matches("<rect").count(), 3);
}

#[test]
fn removed_shapes_are_not_drawn() {
    let mut s = scene();
    let id = s.add(square(1.0));
    assert_eq!(s.len(), 1);
    assert!(s.remove(id).is_some());
    assert!(s.is_empty());
    assert!(s.remove(id).is_none());
    assert!(!s.frame(0.0).contains("<rect"));
}

#[test]
fn background_is_replaced_and_drawn_first() {
    let mut s = scene();
    s.add(square(1.0));
    let first = s.set_background(0.0, -1.0, &StyleMap::new());
    let styles = StyleMap::new().with("fill", "#112233").unwrap();
    let second = s.set_background(0.0, -1.0, &styles);
    assert_ne!(first, second);
    assert!(s.get(first).is_none());
    assert_eq!(s.len(), 2);

    let frame = s.frame(0.0);
    let rects: Vec<&str> = frame.lines().filter(|l| l.starts_with("<rect")).collect();
    assert!(rects[0].contains("width='200' height='100'"));
    assert!(rects[0].contains("fill='rgb(17,34,51)'"));
    assert!(rects[0].contains("stroke-width='0'"));
}

#[test]
fn duration_is_latest_change() {
    let mut s = scene();
    assert_eq!(s.duration(), 0.0);
    let c = Circle::new(5.0, Point::new(10.0, 10.0), 0.0, &StyleMap::new());
    c.center
        .move_to(1.0, 4.5, Point::new(50.0, 50.0), false, Ease::Smooth);
    s.add(c);
    s.add(square(0.0));
    assert_eq!(s.duration(), 4.5);
}

#[test]
fn view_box_restricts_the_header_only() {
    let mut s = scene();
    s.add(square(1.0));
    let frame = s.frame_in(0.0, Rect::new(10.0, 5.0, 110.0, 55.0));
    assert!(frame.contains("width='200' height='100' viewBox='10 5 100 50'>"));
    assert!(frame.contains("<rect x='1'"));
}

#[test]
fn text_context_uses_configured_dir() {
    let s = Scene::new(SceneConfig {
        text_dir: PathBuf::from("/tmp/work"),
        ..SceneConfig::default()
    });
    assert_eq!(s.text_context().work_dir, PathBuf::from("/tmp/work"));
    assert_eq!(s.canvas(), Canvas::default());
}

#[test]
fn config_reads_from_json() {
    let config: SceneConfig =
        serde_json::from_str(r#"{ "canvas": { "width": 640, "height": 360 } }"#).unwrap();
    assert_eq!(config.canvas.width, 640.0);
    assert_eq!(config.text_dir, PathBuf::new());
}
