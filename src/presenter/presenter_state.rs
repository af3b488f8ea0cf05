use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use ratatui::{Frame, layout::Size};

use super::delegate::StatusBarDelegate;
use crate::animation::{Animation, Transition};
use crate::banner::{SPINNER_FRAMES, StatusBarView};
use crate::clock::{Clock, SystemClock};
use crate::style::BannerStyle;
use crate::widgets::popup;

const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Callback run once a dismissal finishes.
///
/// It receives the presenter, already back in [`Phase::Idle`], so it can
/// present or dismiss again.
pub type DismissCompletion = Box<dyn FnOnce(&mut StatusBarPresenter)>;

/// Where the presenter is in its presentation episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No banner.
    Idle,
    /// Banner shown (or animating in), no auto-dismiss armed.
    Presented,
    /// Banner shown with an auto-dismiss timer armed.
    PresentedWithPendingDismiss,
    /// Hide animation in flight.
    Dismissing,
}

/// Animation durations used when the caller doesn't give one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub show_duration: Duration,
    /// Hide duration for auto-dismissals.
    pub dismiss_duration: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            show_duration: Duration::from_millis(250),
            dismiss_duration: Duration::from_millis(400),
        }
    }
}

struct PendingDismiss {
    /// `None` when the delay is too long to represent; such a timer never fires.
    deadline: Option<Instant>,
    completion: Option<DismissCompletion>,
}

enum VisibilityAnimation {
    Showing(Animation),
    Hiding {
        animation: Animation,
        completions: Vec<DismissCompletion>,
    },
}

pub struct StatusBarPresenter {
    style: BannerStyle,
    banner: Option<StatusBarView>,
    delegate: Option<Weak<dyn StatusBarDelegate>>,
    clock: Rc<dyn Clock>,
    timing: Timing,
    container: Size,
    /// The single auto-dismiss timer slot.
    pending_dismiss: Option<PendingDismiss>,
    /// The single show/hide animation slot.
    animation: Option<VisibilityAnimation>,
    /// Width transition following a container resize.
    layout: Option<Animation>,
    presented_at: Option<Instant>,
}

impl StatusBarPresenter {
    pub fn new(style: BannerStyle, clock: impl Clock + 'static) -> Self {
        Self {
            style,
            banner: None,
            delegate: None,
            clock: Rc::new(clock),
            timing: Timing::default(),
            container: Size::default(),
            pending_dismiss: None,
            animation: None,
            layout: None,
            presented_at: None,
        }
    }

    /// Presenter driven by real time.
    pub fn with_style(style: BannerStyle) -> Self {
        Self::new(style, SystemClock)
    }

    #[must_use]
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Keep a weak reference to `delegate`.
    pub fn set_delegate<D: StatusBarDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak = Rc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn style(&self) -> &BannerStyle {
        &self.style
    }

    pub fn banner(&self) -> Option<&StatusBarView> {
        self.banner.as_ref()
    }

    pub fn banner_mut(&mut self) -> Option<&mut StatusBarView> {
        self.banner.as_mut()
    }

    pub fn container_size(&self) -> Size {
        self.container
    }

    pub fn phase(&self) -> Phase {
        if self.banner.is_none() {
            Phase::Idle
        } else if matches!(self.animation, Some(VisibilityAnimation::Hiding { .. })) {
            Phase::Dismissing
        } else if self.pending_dismiss.is_some() {
            Phase::PresentedWithPendingDismiss
        } else {
            Phase::Presented
        }
    }

    /// Whether a banner is on screen, including while it animates out.
    pub fn is_presented(&self) -> bool {
        self.banner.is_some()
    }

    /// When the armed auto-dismiss timer is due, if any.
    pub fn dismiss_deadline(&self) -> Option<Instant> {
        self.pending_dismiss
            .as_ref()
            .and_then(|pending| pending.deadline)
    }

    /// The in-flight show or hide animation.
    pub fn visibility_animation(&self) -> Option<&Animation> {
        match &self.animation {
            Some(VisibilityAnimation::Showing(animation)) => Some(animation),
            Some(VisibilityAnimation::Hiding { animation, .. }) => Some(animation),
            None => None,
        }
    }

    fn delegate(&self) -> Option<Rc<dyn StatusBarDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// Show `status` with `style`, reusing the current banner if there is one.
    ///
    /// Cancels any armed timer and any hide animation. A banner that is
    /// already animating in keeps its animation, so an episode has a single
    /// animate-in no matter how often it is re-presented.
    pub fn present(&mut self, status: &str, style: BannerStyle) -> &mut StatusBarView {
        let now = self.clock.now();

        if self.pending_dismiss.take().is_some() {
            log::debug!("Present cancelled pending auto-dismiss");
        }
        self.style = style.clone();

        let (banner, from) = match self.banner.take() {
            Some(mut banner) => {
                banner.configure(style, status);
                let from = banner.visibility();
                (banner, from)
            }
            None => {
                let mut banner = StatusBarView::new(style, status);
                banner.set_layout_width(self.container.width);
                self.layout = None;
                self.presented_at = Some(now);
                log::debug!("Presenting new banner");
                (banner, 0.0)
            }
        };

        match self.animation.take() {
            Some(VisibilityAnimation::Showing(animation))
                if self.style.animation.is_animated() =>
            {
                self.animation = Some(VisibilityAnimation::Showing(animation));
            }
            Some(VisibilityAnimation::Showing(_)) => {
                log::debug!("Present switched to a static style, showing at once");
            }
            Some(VisibilityAnimation::Hiding { completions, .. }) => {
                log::debug!(
                    "Present interrupted dismissal, dropping {} completion(s)",
                    completions.len()
                );
                self.start_show(now, from);
            }
            None if from < 1.0 => self.start_show(now, from),
            None => {}
        }

        let banner = self.banner.insert(banner);
        if self.animation.is_none() {
            banner.set_visibility(1.0);
        }
        banner
    }

    fn start_show(&mut self, now: Instant, from: f64) {
        if !self.style.animation.is_animated() {
            self.animation = None;
            return;
        }
        self.animation = Some(VisibilityAnimation::Showing(Animation::new(
            from,
            1.0,
            now,
            self.timing.show_duration,
            self.style.animation.show_easing(),
        )));
    }

    /// Dismiss after `delay` using the default hide duration.
    ///
    /// Only one timer exists; re-arming replaces it and drops the replaced
    /// completion. A zero delay dismisses right away. While a hide is already
    /// running the completion joins it instead.
    pub fn schedule_dismiss(&mut self, delay: Duration, completion: Option<DismissCompletion>) {
        match self.phase() {
            Phase::Idle => {
                log::debug!("Ignoring scheduled dismiss: nothing presented");
            }
            Phase::Dismissing => self.join_dismissal(completion),
            Phase::Presented | Phase::PresentedWithPendingDismiss if delay.is_zero() => {
                self.dismiss(self.timing.dismiss_duration, completion);
            }
            Phase::Presented | Phase::PresentedWithPendingDismiss => {
                let deadline = self.clock.now().checked_add(delay);
                if deadline.is_none() {
                    log::debug!(
                        "Auto-dismiss delay {:?} out of range, timer will not fire",
                        delay
                    );
                }
                let replaced = self
                    .pending_dismiss
                    .replace(PendingDismiss {
                        deadline,
                        completion,
                    })
                    .is_some();
                log::debug!(
                    "Auto-dismiss armed for {:?}{}",
                    delay,
                    if replaced { " (replaced previous)" } else { "" }
                );
            }
        }
    }

    /// Hide the banner over `duration`.
    ///
    /// No-op when idle. While already dismissing no second animation starts;
    /// the completion runs when the current one finishes.
    pub fn dismiss(&mut self, duration: Duration, completion: Option<DismissCompletion>) {
        match self.phase() {
            Phase::Idle => {
                log::debug!("Ignoring dismiss: nothing presented");
                return;
            }
            Phase::Dismissing => {
                self.join_dismissal(completion);
                return;
            }
            Phase::Presented | Phase::PresentedWithPendingDismiss => {}
        }
        let from = self.banner.as_ref().map_or(1.0, StatusBarView::visibility);

        if self.pending_dismiss.take().is_some() {
            log::debug!("Dismiss cancelled pending auto-dismiss");
        }

        let duration = if self.style.animation.is_animated() {
            duration
        } else {
            Duration::ZERO
        };
        self.animation = Some(VisibilityAnimation::Hiding {
            animation: Animation::new(
                from,
                0.0,
                self.clock.now(),
                duration,
                self.style.animation.hide_easing(),
            ),
            completions: completion.into_iter().collect(),
        });
    }

    fn join_dismissal(&mut self, completion: Option<DismissCompletion>) {
        if let Some(VisibilityAnimation::Hiding { completions, .. }) = &mut self.animation {
            completions.extend(completion);
        }
    }

    /// React to the container (terminal) being resized.
    ///
    /// The delegate decides how the banner follows the resize. The
    /// show/hide state and any armed timer are left alone.
    pub fn on_container_size_changed(&mut self, size: Size) {
        let now = self.clock.now();
        self.container = size;

        let Some(current_width) = self.banner.as_ref().map(StatusBarView::layout_width) else {
            return;
        };

        let transition = self
            .delegate()
            .and_then(|delegate| delegate.animations_for_view_transition_to_size(size))
            .unwrap_or_else(Transition::immediate);

        // A zero width means the banner was laid out before the container size
        // was known; there is nothing sensible to animate from.
        if transition.duration.is_zero() || (current_width == 0 && self.layout.is_none()) {
            self.layout = None;
            if let Some(banner) = self.banner.as_mut() {
                banner.set_layout_width(size.width);
            }
            return;
        }

        let from = self
            .layout
            .map(|layout| layout.value(now))
            .unwrap_or(f64::from(current_width));
        self.layout = Some(Animation::new(
            from,
            f64::from(size.width),
            now,
            transition.duration,
            transition.easing,
        ));
    }

    /// Advance layout, show/hide animations and the auto-dismiss timer.
    ///
    /// Returns whether the banner changed and needs redrawing.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let Some(banner) = self.banner.as_mut() else {
            return false;
        };
        let mut changed = false;

        if let Some(layout) = self.layout {
            let width = layout.value(now).round() as u16;
            if width != banner.layout_width() {
                banner.set_layout_width(width);
                changed = true;
            }
            if layout.is_finished(now) {
                self.layout = None;
            }
        }

        if banner.shows_activity_indicator()
            && let Some(presented_at) = self.presented_at
        {
            let elapsed = now.saturating_duration_since(presented_at);
            let frame = (elapsed.as_millis() / SPINNER_INTERVAL.as_millis()) as usize
                % SPINNER_FRAMES.len();
            if frame != banner.spinner_frame() {
                banner.set_spinner_frame(frame);
                changed = true;
            }
        }

        match self.animation.take() {
            Some(VisibilityAnimation::Showing(animation)) => {
                banner.set_visibility(animation.value(now));
                changed = true;
                if animation.is_finished(now) {
                    banner.set_visibility(1.0);
                } else {
                    self.animation = Some(VisibilityAnimation::Showing(animation));
                }
            }
            Some(VisibilityAnimation::Hiding {
                animation,
                completions,
            }) => {
                banner.set_visibility(animation.value(now));
                if animation.is_finished(now) {
                    self.finish_dismissal(completions);
                    return true;
                }
                self.animation = Some(VisibilityAnimation::Hiding {
                    animation,
                    completions,
                });
                changed = true;
            }
            None => {}
        }

        // A due timer waits for an in-flight show animation to settle.
        let timer_due = self.animation.is_none()
            && self
                .pending_dismiss
                .as_ref()
                .and_then(|pending| pending.deadline)
                .is_some_and(|deadline| deadline <= now);
        if timer_due && let Some(pending) = self.pending_dismiss.take() {
            log::debug!("Auto-dismiss fired");
            self.dismiss(self.timing.dismiss_duration, pending.completion);
            changed = true;
        }

        changed
    }

    fn finish_dismissal(&mut self, completions: Vec<DismissCompletion>) {
        self.banner = None;
        self.animation = None;
        self.pending_dismiss = None;
        self.layout = None;
        self.presented_at = None;
        log::debug!("Banner dismissed");

        for completion in completions {
            completion(self);
        }

        if let Some(delegate) = self.delegate() {
            delegate.did_dismiss_status_bar();
        }
    }

    /// Draw the banner over the top of the frame.
    pub fn render(&self, frame: &mut Frame) {
        let Some(banner) = self.banner.as_ref() else {
            return;
        };
        let area = frame.area();
        let banner_area = banner.frame(area);
        if banner_area.is_empty() {
            return;
        }
        popup::clear_area(frame, banner_area);
        frame.render_widget(banner, area);
    }
}
