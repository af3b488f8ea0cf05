//! Status bar presenter
//!
//! Orchestrates one presentation episode at a time: showing the banner,
//! arming an auto-dismiss timer, running the hide animation and telling the
//! delegate once the banner is gone. All work happens on the caller's thread;
//! the host drives timers and animations by calling
//! [`StatusBarPresenter::tick`] from its event loop.

mod delegate;
mod presenter_state;

pub use delegate::StatusBarDelegate;
pub use presenter_state::{DismissCompletion, Phase, StatusBarPresenter, Timing};
