use ratatui::layout::{Rect, Size};

use crate::style::BannerStyle;
use crate::widgets::popup;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The visible status bar banner.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarView {
    text: String,
    style: BannerStyle,
    /// 0.0 fully hidden, 1.0 fully shown.
    visibility: f64,
    /// Width the banner lays out at; 0 means "fill the container".
    layout_width: u16,
    progress: Option<f64>,
    activity_indicator: bool,
    spinner_frame: usize,
}

impl StatusBarView {
    pub fn new(style: BannerStyle, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style,
            visibility: 0.0,
            layout_width: 0,
            progress: None,
            activity_indicator: false,
            spinner_frame: 0,
        }
    }

    /// Replace content and style in place.
    pub fn configure(&mut self, style: BannerStyle, text: impl Into<String>) {
        self.style = style;
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &BannerStyle {
        &self.style
    }

    pub fn visibility(&self) -> f64 {
        self.visibility
    }

    pub fn is_fully_visible(&self) -> bool {
        self.visibility >= 1.0
    }

    pub fn layout_width(&self) -> u16 {
        self.layout_width
    }

    /// Progress in `0.0..=1.0`, or `None` to hide the progress bar.
    pub fn set_progress(&mut self, progress: Option<f64>) {
        self.progress = progress.map(|p| if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) });
    }

    pub fn progress(&self) -> Option<f64> {
        self.progress
    }

    pub fn set_activity_indicator(&mut self, show: bool) {
        self.activity_indicator = show;
        if !show {
            self.spinner_frame = 0;
        }
    }

    pub fn shows_activity_indicator(&self) -> bool {
        self.activity_indicator
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    /// Size the banner wants inside `container`: full width, style height.
    pub fn intrinsic_size(&self, container: Size) -> Size {
        let width = if self.layout_width == 0 {
            container.width
        } else {
            self.layout_width.min(container.width)
        };
        Size {
            width,
            height: self.style.height().min(container.height),
        }
    }

    /// Rows of the banner currently on screen.
    ///
    /// Sliding animations reveal the banner from its bottom row upwards, so
    /// the hidden rows are the top ones.
    pub fn visible_rows(&self) -> u16 {
        let height = self.style.height();
        if self.visibility <= 0.0 {
            return 0;
        }
        if !self.style.animation.slides() {
            return height;
        }
        let rows = (f64::from(height) * self.visibility.min(1.0)).round() as u16;
        rows.min(height)
    }

    /// Area the banner occupies inside `container` at its current visibility.
    pub fn frame(&self, container: Rect) -> Rect {
        let size = self.intrinsic_size(Size {
            width: container.width,
            height: container.height,
        });
        popup::top_anchored(container, size.width, self.visible_rows().min(size.height))
    }

    pub(crate) fn set_visibility(&mut self, visibility: f64) {
        self.visibility = visibility.clamp(0.0, 1.0);
    }

    pub(crate) fn set_layout_width(&mut self, width: u16) {
        self.layout_width = width;
    }

    pub(crate) fn set_spinner_frame(&mut self, frame: usize) {
        self.spinner_frame = frame % SPINNER_FRAMES.len();
    }
}
