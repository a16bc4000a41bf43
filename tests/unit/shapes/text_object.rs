use super::*;
use crate::text::StaticTextRenderer;

const TWO_BARS: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='20' height='10' viewBox='0 0 20 10'>\
                        <path transform='translate(2,3)' d='M0 0 L4 0 L4 6 Z'/>\
                        <path d='M10 0 L14 0 L14 6 Z'/></svg>";

fn text(x: f64, y: f64) -> TextObject {
    let renderer = StaticTextRenderer::new().with("ab", TWO_BARS);
    TextObject::new(
        &renderer,
        &TextContext::default(),
        "ab",
        x,
        y,
        0.0,
        &StyleMap::new(),
    )
    .unwrap()
}

#[test]
fn top_left_corner_sits_at_anchor() {
    let t = text(100.0, 50.0);
    assert_eq!(t.pieces().len(), 2);
    assert_eq!(t.view_box(), Rect::new(0.0, 0.0, 20.0, 10.0));
    assert_eq!(t.bbox(0.0).unwrap(), Rect::new(100.0, 50.0, 112.0, 59.0));
}

#[test]
fn fragments_keep_relative_layout() {
    let t = text(0.0, 0.0);
    let first = t.pieces()[0].bbox(0.0).unwrap();
    let second = t.pieces()[1].bbox(0.0).unwrap();
    assert_eq!(second.x0 - first.x0, 8.0);
    assert_eq!(first.y0 - second.y0, 3.0);
}

#[test]
fn shift_moves_the_anchor() {
    let t = text(100.0, 50.0);
    t.shift(10.0, -5.0, 1.0, Some(2.0), Ease::Linear).unwrap();
    assert_eq!(t.x.at(2.0), 110.0);
    assert_eq!(t.bbox(1.5).unwrap().origin(), kurbo::Point::new(105.0, 47.5));
    assert_eq!(t.bbox(3.0).unwrap().origin(), kurbo::Point::new(110.0, 45.0));
    assert_eq!(t.last_change(), 2.0);
}

#[test]
fn pieces_are_filled_white_without_stroke() {
    let markup = text(0.0, 0.0).to_markup(0.0);
    assert!(markup.starts_with("<g>\n<path d='M 0,0 L 4,0 L 4,6 L 0,0'"));
    assert_eq!(markup.matches("fill='rgb(255,255,255)' stroke-width='0'").count(), 2);
}
