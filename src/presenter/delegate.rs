use ratatui::layout::Size;

use crate::animation::Transition;

/// Host-side observer of a presenter.
///
/// The presenter only keeps a weak reference, so the delegate's owner decides
/// its lifetime. Methods take `&self`; hosts that need to mutate state use
/// interior mutability.
pub trait StatusBarDelegate {
    /// Called when the container is resized while a banner is presented.
    /// Returning `None` relayouts the banner immediately.
    fn animations_for_view_transition_to_size(&self, _size: Size) -> Option<Transition> {
        None
    }

    /// Called exactly once per completed dismissal, after the banner is gone.
    fn did_dismiss_status_bar(&self);
}
