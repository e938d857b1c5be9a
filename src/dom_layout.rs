use iyada_core::{Rect, Size};
use web_sys::Element;

pub(crate) fn element_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

pub(crate) fn viewport_size() -> Size {
    let Some(window) = web_sys::window() else {
        return Size {
            width: 0.0,
            height: 0.0,
        };
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    Size {
        width: width as f32,
        height: height as f32,
    }
}
