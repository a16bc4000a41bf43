use super::*;

#[test]
fn progress_is_linear_inside_the_interval() {
    assert_eq!(progress(1.0, 0.0, 2.0), 0.5);
    assert_eq!(progress(3.0, 1.0, 3.0), 1.0);
    assert_eq!(progress(-1.0, 0.0, 2.0), -0.5);
}

#[test]
fn progress_steps_on_zero_length_interval() {
    assert_eq!(progress(0.9, 1.0, 1.0), 0.0);
    assert_eq!(progress(1.0, 1.0, 1.0), 1.0);
    assert_eq!(progress(5.0, 1.0, 1.0), 1.0);
}

#[test]
fn canvas_view_box_spans_canvas() {
    let c = Canvas {
        width: 640.0,
        height: 360.0,
    };
    assert_eq!(c.view_box(), Rect::new(0.0, 0.0, 640.0, 360.0));
    assert_eq!(Canvas::default().width, 1000.0);
}
