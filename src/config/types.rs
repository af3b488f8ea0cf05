// Configuration type definitions

use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier},
};
use serde::Deserialize;

use crate::animation::{Easing, Transition};
use crate::error::{BannerError, Result};
use crate::presenter::Timing;
use crate::style::{
    AnimationType, BannerStyle, IncludedStyle, ProgressBarPosition, StyleRegistry,
};

/// Text alignment inside the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    Left,
    Center,
    Right,
}

impl From<TextAlignment> for Alignment {
    fn from(alignment: TextAlignment) -> Self {
        match alignment {
            TextAlignment::Left => Alignment::Left,
            TextAlignment::Center => Alignment::Center,
            TextAlignment::Right => Alignment::Right,
        }
    }
}

/// Animation timing section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub show_duration_ms: u64,
    pub dismiss_duration_ms: u64,
    pub default_dismiss_delay_ms: u64,
    pub resize_duration_ms: u64,
    pub resize_easing: Easing,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            show_duration_ms: 250,
            dismiss_duration_ms: 400,
            default_dismiss_delay_ms: 2000,
            resize_duration_ms: 150,
            resize_easing: Easing::EaseInOut,
        }
    }
}

impl TimingConfig {
    pub fn timing(&self) -> Timing {
        Timing {
            show_duration: Duration::from_millis(self.show_duration_ms),
            dismiss_duration: Duration::from_millis(self.dismiss_duration_ms),
        }
    }

    pub fn default_dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.default_dismiss_delay_ms)
    }

    pub fn resize_transition(&self) -> Transition {
        Transition::new(
            Duration::from_millis(self.resize_duration_ms),
            self.resize_easing,
        )
    }
}

/// A user-defined style; unset fields come from `base` (an included style)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub base: Option<String>,
    pub background: Option<String>,
    pub text_color: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub height: Option<u16>,
    pub alignment: Option<TextAlignment>,
    pub text_offset_y: Option<i16>,
    pub animation: Option<AnimationType>,
    pub progress_color: Option<String>,
    pub progress_position: Option<ProgressBarPosition>,
    pub progress_inset: Option<u16>,
}

fn parse_color(style: &str, value: &str) -> Result<Color> {
    Color::from_str(value).map_err(|_| BannerError::InvalidColor {
        style: style.to_string(),
        value: value.to_string(),
    })
}

fn toggle(modifier: &mut Modifier, flag: Modifier, enabled: Option<bool>) {
    match enabled {
        Some(true) => modifier.insert(flag),
        Some(false) => modifier.remove(flag),
        None => {}
    }
}

impl StyleConfig {
    pub fn to_style(&self, name: &str) -> Result<BannerStyle> {
        let base = match &self.base {
            Some(base) => IncludedStyle::from_str(base)?,
            None => IncludedStyle::Default,
        };
        let mut style = base.style();

        if let Some(background) = &self.background {
            style.background = parse_color(name, background)?;
        }
        if let Some(text_color) = &self.text_color {
            style.text_color = parse_color(name, text_color)?;
        }
        toggle(&mut style.text_modifier, Modifier::BOLD, self.bold);
        toggle(&mut style.text_modifier, Modifier::ITALIC, self.italic);
        if let Some(height) = self.height {
            style = style.with_height(height);
        }
        if let Some(alignment) = self.alignment {
            style.text_alignment = alignment.into();
        }
        if let Some(offset) = self.text_offset_y {
            style.text_offset_y = offset;
        }
        if let Some(animation) = self.animation {
            style.animation = animation;
        }
        if let Some(color) = &self.progress_color {
            style.progress_bar.color = parse_color(name, color)?;
        }
        if let Some(position) = self.progress_position {
            style.progress_bar.position = position;
        }
        if let Some(inset) = self.progress_inset {
            style.progress_bar.horizontal_inset = inset;
        }
        Ok(style)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_style: Option<String>,
    pub timing: TimingConfig,
    pub styles: BTreeMap<String, StyleConfig>,
}

impl Config {
    /// Included styles plus every style declared in the file.
    pub fn registry(&self) -> Result<StyleRegistry> {
        let mut registry = StyleRegistry::new();
        for (name, style) in &self.styles {
            registry.add_style(name.clone(), style.to_style(name)?);
        }
        Ok(registry)
    }

    pub fn default_style_name(&self) -> &str {
        self.default_style
            .as_deref()
            .unwrap_or(IncludedStyle::Default.name())
    }
}
