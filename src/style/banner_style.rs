use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
};
use serde::Deserialize;

use crate::animation::Easing;

/// How the banner enters and leaves the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    /// Appear and disappear instantly.
    None,
    /// Slide down from above the top edge.
    #[default]
    Move,
    /// Slide down and bounce into place.
    Bounce,
    /// Stay in place and fade the colors in and out.
    Fade,
}

impl AnimationType {
    pub fn show_easing(self) -> Easing {
        match self {
            AnimationType::Bounce => Easing::Bounce,
            AnimationType::Fade => Easing::EaseInOut,
            AnimationType::None | AnimationType::Move => Easing::EaseOut,
        }
    }

    pub fn hide_easing(self) -> Easing {
        match self {
            AnimationType::Fade => Easing::EaseInOut,
            _ => Easing::EaseIn,
        }
    }

    pub fn is_animated(self) -> bool {
        self != AnimationType::None
    }

    /// Whether the banner's frame moves with its visibility.
    pub fn slides(self) -> bool {
        matches!(self, AnimationType::Move | AnimationType::Bounce)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressBarPosition {
    Top,
    Center,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBarStyle {
    pub color: Color,
    pub symbol: &'static str,
    pub position: ProgressBarPosition,
    pub horizontal_inset: u16,
}

impl Default for ProgressBarStyle {
    fn default() -> Self {
        Self {
            color: Color::Green,
            symbol: "▀",
            position: ProgressBarPosition::Bottom,
            horizontal_inset: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerStyle {
    pub background: Color,
    pub text_color: Color,
    pub text_modifier: Modifier,
    /// Banner height in rows, never below 1.
    pub height: u16,
    pub text_alignment: Alignment,
    /// Shifts the text row relative to the vertical centre of the banner.
    pub text_offset_y: i16,
    pub animation: AnimationType,
    pub progress_bar: ProgressBarStyle,
}

impl BannerStyle {
    pub fn with_colors(mut self, background: Color, text_color: Color) -> Self {
        self.background = background;
        self.text_color = text_color;
        self
    }

    pub fn with_height(mut self, height: u16) -> Self {
        self.height = height.max(1);
        self
    }

    pub fn with_animation(mut self, animation: AnimationType) -> Self {
        self.animation = animation;
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.text_modifier = modifier;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.text_alignment = alignment;
        self
    }

    pub fn with_progress_bar(mut self, progress_bar: ProgressBarStyle) -> Self {
        self.progress_bar = progress_bar;
        self
    }

    pub fn height(&self) -> u16 {
        self.height.max(1)
    }

    /// Cell style for the banner body.
    pub fn body_style(&self) -> Style {
        Style::default().bg(self.background)
    }

    /// Cell style for the status text.
    pub fn text_style(&self) -> Style {
        Style::default()
            .fg(self.text_color)
            .bg(self.background)
            .add_modifier(self.text_modifier)
    }
}

impl Default for BannerStyle {
    fn default() -> Self {
        Self {
            background: Color::White,
            text_color: Color::Gray,
            text_modifier: Modifier::empty(),
            height: 1,
            text_alignment: Alignment::Center,
            text_offset_y: 0,
            animation: AnimationType::Move,
            progress_bar: ProgressBarStyle::default(),
        }
    }
}
