use std::str::FromStr;

use ratatui::style::{Color, Modifier};

use super::banner_style::{BannerStyle, ProgressBarStyle};
use crate::error::BannerError;

/// Built-in styles, available in every registry under their lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncludedStyle {
    #[default]
    Default,
    Light,
    Dark,
    Success,
    Warning,
    Error,
    Matrix,
}

impl IncludedStyle {
    pub fn all() -> &'static [IncludedStyle] {
        &[
            IncludedStyle::Default,
            IncludedStyle::Light,
            IncludedStyle::Dark,
            IncludedStyle::Success,
            IncludedStyle::Warning,
            IncludedStyle::Error,
            IncludedStyle::Matrix,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            IncludedStyle::Default => "default",
            IncludedStyle::Light => "light",
            IncludedStyle::Dark => "dark",
            IncludedStyle::Success => "success",
            IncludedStyle::Warning => "warning",
            IncludedStyle::Error => "error",
            IncludedStyle::Matrix => "matrix",
        }
    }

    pub fn style(self) -> BannerStyle {
        let base = BannerStyle::default();
        match self {
            IncludedStyle::Default => base,
            IncludedStyle::Light => base.with_colors(Color::White, Color::Black),
            IncludedStyle::Dark => base.with_colors(Color::Black, Color::White),
            IncludedStyle::Success => base
                .with_colors(Color::Green, Color::White)
                .with_modifier(Modifier::BOLD)
                .with_progress_bar(ProgressBarStyle {
                    color: Color::LightGreen,
                    ..ProgressBarStyle::default()
                }),
            IncludedStyle::Warning => base
                .with_colors(Color::Yellow, Color::Black)
                .with_progress_bar(ProgressBarStyle {
                    color: Color::LightYellow,
                    ..ProgressBarStyle::default()
                }),
            IncludedStyle::Error => base
                .with_colors(Color::Red, Color::White)
                .with_modifier(Modifier::BOLD)
                .with_progress_bar(ProgressBarStyle {
                    color: Color::LightRed,
                    ..ProgressBarStyle::default()
                }),
            IncludedStyle::Matrix => base
                .with_colors(Color::Black, Color::Green)
                .with_modifier(Modifier::BOLD)
                .with_progress_bar(ProgressBarStyle {
                    color: Color::LightGreen,
                    symbol: "▁",
                    ..ProgressBarStyle::default()
                }),
        }
    }
}

impl FromStr for IncludedStyle {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        IncludedStyle::all()
            .iter()
            .copied()
            .find(|style| style.name() == lower)
            .ok_or_else(|| BannerError::UnknownStyle(s.to_string()))
    }
}
