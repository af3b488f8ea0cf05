//! Banner styling
//!
//! A [`BannerStyle`] is a plain value describing how a banner looks and how
//! it animates. The presenter never inspects it beyond the animation type;
//! it is handed to the banner on every `present`.

mod banner_style;
mod included;
mod registry;

pub use banner_style::{AnimationType, BannerStyle, ProgressBarPosition, ProgressBarStyle};
pub use included::IncludedStyle;
pub use registry::StyleRegistry;
