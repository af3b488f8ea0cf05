use std::collections::BTreeMap;

use super::banner_style::BannerStyle;
use super::included::IncludedStyle;
use crate::error::{BannerError, Result};

/// Named styles a caller can present with.
///
/// Seeded with every [`IncludedStyle`]; user styles added later shadow a
/// preset with the same name.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: BTreeMap<String, BannerStyle>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        let styles = IncludedStyle::all()
            .iter()
            .map(|included| (included.name().to_string(), included.style()))
            .collect();
        Self { styles }
    }

    pub fn add_style(&mut self, name: impl Into<String>, style: BannerStyle) {
        let name = name.into();
        if self.styles.contains_key(&name) {
            log::debug!("Style '{}' replaced", name);
        }
        self.styles.insert(name, style);
    }

    pub fn style(&self, name: &str) -> Option<&BannerStyle> {
        self.styles.get(name)
    }

    pub fn resolve(&self, name: &str) -> Result<BannerStyle> {
        self.style(name)
            .cloned()
            .ok_or_else(|| BannerError::UnknownStyle(name.to_string()))
    }

    /// Style names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
