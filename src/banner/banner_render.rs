use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::banner_state::{SPINNER_FRAMES, StatusBarView};
use crate::style::{AnimationType, ProgressBarPosition};
use crate::widgets::popup;

const ELLIPSIS: &str = "…";

/// Cut `text` to at most `max_width` display columns, ending in an ellipsis
/// when anything was dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - ELLIPSIS.width();
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ELLIPSIS);
    out
}

impl StatusBarView {
    /// Text as drawn, with the spinner in front when active.
    fn display_text(&self) -> String {
        if self.shows_activity_indicator() {
            format!("{} {}", SPINNER_FRAMES[self.spinner_frame()], self.text())
        } else {
            self.text().to_string()
        }
    }

    /// Banner-relative row of the status text.
    fn text_row(&self) -> u16 {
        let height = self.style().height();
        let centre = i32::from((height - 1) / 2);
        let row = centre + i32::from(self.style().text_offset_y);
        row.clamp(0, i32::from(height) - 1) as u16
    }

    fn progress_row(&self) -> u16 {
        let height = self.style().height();
        match self.style().progress_bar.position {
            ProgressBarPosition::Top => 0,
            ProgressBarPosition::Center => (height - 1) / 2,
            ProgressBarPosition::Bottom => height - 1,
        }
    }

    /// Rows hidden by a slide, counted from the top of the banner.
    fn slid_rows(&self) -> u16 {
        self.style().height().saturating_sub(self.visible_rows())
    }

    /// Frame-relative line of the status text. A container shorter than the
    /// banner pulls the text up onto its last row.
    fn text_line(&self, frame: Rect) -> Option<u16> {
        let line = self.text_row().checked_sub(self.slid_rows())?;
        Some(line.min(frame.height.saturating_sub(1)))
    }

    fn render_progress(&self, frame: Rect, buf: &mut Buffer) {
        let Some(progress) = self.progress() else {
            return;
        };
        let Some(line) = self.progress_row().checked_sub(self.slid_rows()) else {
            return;
        };
        if line >= frame.height {
            return;
        }
        let y = frame.y + line;
        let bar = &self.style().progress_bar;
        let track = popup::inset_rect(
            Rect {
                x: frame.x,
                y,
                width: frame.width,
                height: 1,
            },
            bar.horizontal_inset,
            0,
        );
        let filled = (f64::from(track.width) * progress).round() as u16;
        let shares_text_row = self.text_line(frame) == Some(line);
        for x in track.x..track.x + filled {
            let cell = &mut buf[(x, y)];
            if !shares_text_row {
                cell.set_symbol(bar.symbol);
                cell.set_fg(bar.color);
            } else {
                cell.set_bg(bar.color);
            }
        }
    }
}

impl Widget for &StatusBarView {
    /// `area` is the whole container; the banner draws into its own frame
    /// at the top of it.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frame = self.frame(area);
        if frame.is_empty() {
            return;
        }

        let style = self.style();
        buf.set_style(frame, style.body_style());
        for y in frame.top()..frame.bottom() {
            for x in frame.left()..frame.right() {
                buf[(x, y)].set_symbol(" ");
            }
        }

        if let Some(line) = self.text_line(frame) {
            let y = frame.y + line;
            let text = truncate_to_width(&self.display_text(), usize::from(frame.width));
            let text_width = text.width() as u16;
            let offset = match style.text_alignment {
                Alignment::Left => 0,
                Alignment::Center => (frame.width - text_width) / 2,
                Alignment::Right => frame.width - text_width,
            };
            buf.set_stringn(
                frame.x + offset,
                y,
                &text,
                usize::from(frame.width),
                style.text_style(),
            );
        }

        self.render_progress(frame, buf);

        if style.animation == AnimationType::Fade && !self.is_fully_visible() {
            buf.set_style(frame, Style::default().add_modifier(Modifier::DIM));
        }
    }
}
