use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area of `height` rows pinned to the top edge of `frame_area`, clamped to
/// fit inside it.
pub fn top_anchored(frame_area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: frame_area.x,
        y: frame_area.y,
        width: width.min(frame_area.width),
        height: height.min(frame_area.height),
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
