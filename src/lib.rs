//! status-banner: a transient status-bar notification for terminal UIs
//!
//! A [`StatusBarPresenter`] owns one banner drawn over the top rows of the
//! frame. It animates the banner in, dismisses it after a delay or on
//! request, follows terminal resizes, and tells its [`StatusBarDelegate`]
//! when the banner is gone.

pub mod animation;
pub mod banner;
pub mod clock;
pub mod config;
pub mod error;
pub mod presenter;
pub mod style;
pub mod widgets;

pub use animation::{Easing, Transition};
pub use banner::StatusBarView;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::BannerError;
pub use presenter::{DismissCompletion, Phase, StatusBarDelegate, StatusBarPresenter, Timing};
pub use style::{AnimationType, BannerStyle, IncludedStyle, StyleRegistry};
