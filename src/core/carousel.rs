//! Testimonial carousel state machine
//!
//! The controller is platform independent: it never touches timers itself.
//! Every operation returns the [`CarouselCommand`]s the host must carry out
//! (arm or cancel the rotation interval, schedule or cancel a transition
//! phase), and the host reports timer expiry back through
//! [`Carousel::rotation_tick`] and [`Carousel::transition_elapsed`].
//!
//! # Display transitions
//!
//! An animated display runs `Idle -> Hiding -> Swapped -> Idle`:
//!
//! - **Hiding**: content is fading out, the old text is still in place.
//! - **Swapped**: content is hidden and already shows the new text.
//! - **Idle**: content is visible.
//!
//! Only one transition is ever in flight. Its token is the only one that
//! [`Carousel::transition_elapsed`] accepts, so callbacks from cancelled or
//! superseded phases are ignored. A display requested while `Hiding`
//! retargets the pending swap; one requested while `Swapped` swaps the text
//! again immediately (the content is hidden) and keeps the pending reveal.
//!
//! # Example
//!
//! ```
//! use marketing_site::core::carousel::{Carousel, CarouselCommand};
//! use marketing_site::core::Testimonial;
//!
//! let mut carousel = Carousel::new();
//! let commands = carousel.load(Ok(vec![
//!     Testimonial::new("Great", "A"),
//!     Testimonial::new("Fast", "B"),
//! ]));
//!
//! assert_eq!(carousel.current_index(), Some(0));
//! assert!(matches!(commands[..], [CarouselCommand::StartRotation { .. }]));
//! ```

use std::time::Duration;

use super::testimonials::{Testimonial, TestimonialError};

/// Period of the auto-rotation timer
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(5000);

/// Fade-out time before the content is swapped
pub const HIDE_DURATION: Duration = Duration::from_millis(300);

/// Hold time between the swap and the reveal
pub const REVEAL_DELAY: Duration = Duration::from_millis(50);

/// Shown in place of the carousel when the testimonials cannot be loaded
pub const FALLBACK_MESSAGE: &str = "Testimonials are unavailable at the moment.";

/// Identifies one arming of the rotation interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Identifies one scheduled transition phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionToken(u64);

/// Lifecycle of the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarouselStatus {
    /// Waiting for the testimonial load
    #[default]
    Uninitialized,
    /// Items loaded, navigation live
    Active,
    /// Load failed, fallback shown for the rest of the session
    Failed,
}

/// Whether auto-rotation is armed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    #[default]
    Running,
    /// Pointer is over the carousel
    Paused,
}

/// Progress of the hide/swap/reveal sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Hiding {
        token: TransitionToken,
        target: usize,
    },
    Swapped {
        token: TransitionToken,
    },
}

/// Timer work the host has to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    /// Arm a repeating timer; report each expiry with `rotation_tick(timer)`
    StartRotation { timer: TimerId, period: Duration },
    /// Disarm a previously started rotation timer
    CancelRotation { timer: TimerId },
    /// Arm a one-shot timer; report expiry with `transition_elapsed(token)`
    ScheduleTransition {
        token: TransitionToken,
        delay: Duration,
    },
    /// Disarm a previously scheduled transition phase
    CancelTransition { token: TransitionToken },
}

/// Testimonial carousel controller
#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<Testimonial>,
    status: CarouselStatus,
    /// Navigation position; drives the active dot
    current: usize,
    /// Item whose text is currently rendered
    shown: usize,
    first_render: bool,
    mode: RotationMode,
    rotation: Option<TimerId>,
    transition: TransitionPhase,
    next_id: u64,
}

impl Carousel {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            status: CarouselStatus::Uninitialized,
            current: 0,
            shown: 0,
            first_render: true,
            mode: RotationMode::Running,
            rotation: None,
            transition: TransitionPhase::Idle,
            next_id: 0,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn status(&self) -> CarouselStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == CarouselStatus::Active
    }

    pub fn is_failed(&self) -> bool {
        self.status == CarouselStatus::Failed
    }

    /// Current navigation index, `None` until a successful load
    pub fn current_index(&self) -> Option<usize> {
        self.is_active().then_some(self.current)
    }

    /// The testimonial whose text is rendered right now
    pub fn displayed(&self) -> Option<&Testimonial> {
        if self.is_active() {
            self.items.get(self.shown)
        } else {
            None
        }
    }

    /// True while a transition keeps the content faded out
    pub fn is_content_hidden(&self) -> bool {
        !matches!(self.transition, TransitionPhase::Idle)
    }

    /// One flag per dot indicator; empty unless the carousel is active
    pub fn dots(&self) -> Vec<bool> {
        if !self.is_active() {
            return Vec::new();
        }
        (0..self.items.len()).map(|i| i == self.current).collect()
    }

    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    /// The live rotation timer, if one is armed
    pub fn rotation_timer(&self) -> Option<TimerId> {
        self.rotation
    }

    pub fn transition(&self) -> TransitionPhase {
        self.transition
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Apply the result of the one-time testimonial fetch.
    ///
    /// A non-empty list activates the carousel at index 0 without animation
    /// and arms auto-rotation, unless the pointer is already over the
    /// carousel. An error or an empty list moves it to
    /// [`CarouselStatus::Failed`] with no timers. Only the first call has any
    /// effect.
    pub fn load(
        &mut self,
        result: Result<Vec<Testimonial>, TestimonialError>,
    ) -> Vec<CarouselCommand> {
        if self.status != CarouselStatus::Uninitialized {
            return Vec::new();
        }

        match result {
            Ok(items) if !items.is_empty() => {
                self.items = items;
                self.status = CarouselStatus::Active;
                let mut commands = self.display(0, false);
                if self.mode == RotationMode::Running {
                    commands.extend(self.start_rotation());
                }
                commands
            }
            _ => {
                self.status = CarouselStatus::Failed;
                Vec::new()
            }
        }
    }

    // ========================================================================
    // Display
    // ========================================================================

    /// Move to `index`, animating unless `animate` is false or nothing has
    /// been displayed yet. Out-of-range indexes are ignored.
    pub fn display(&mut self, index: usize, animate: bool) -> Vec<CarouselCommand> {
        if !self.is_active() || index >= self.items.len() {
            return Vec::new();
        }

        self.current = index;

        if !animate || self.first_render {
            self.first_render = false;
            self.shown = index;
            return self.cancel_transition().into_iter().collect();
        }

        match self.transition {
            TransitionPhase::Idle => {
                let token = self.next_token();
                self.transition = TransitionPhase::Hiding {
                    token,
                    target: index,
                };
                vec![CarouselCommand::ScheduleTransition {
                    token,
                    delay: HIDE_DURATION,
                }]
            }
            TransitionPhase::Hiding { token, .. } => {
                self.transition = TransitionPhase::Hiding {
                    token,
                    target: index,
                };
                Vec::new()
            }
            TransitionPhase::Swapped { .. } => {
                self.shown = index;
                Vec::new()
            }
        }
    }

    /// Advance the in-flight transition. Stale tokens are ignored.
    pub fn transition_elapsed(&mut self, token: TransitionToken) -> Vec<CarouselCommand> {
        match self.transition {
            TransitionPhase::Hiding { token: live, target } if live == token => {
                self.shown = target;
                let reveal = self.next_token();
                self.transition = TransitionPhase::Swapped { token: reveal };
                vec![CarouselCommand::ScheduleTransition {
                    token: reveal,
                    delay: REVEAL_DELAY,
                }]
            }
            TransitionPhase::Swapped { token: live } if live == token => {
                self.transition = TransitionPhase::Idle;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn next(&mut self) -> Vec<CarouselCommand> {
        if !self.is_active() {
            return Vec::new();
        }
        let index = (self.current + 1) % self.items.len();
        self.navigate(index)
    }

    pub fn previous(&mut self) -> Vec<CarouselCommand> {
        if !self.is_active() {
            return Vec::new();
        }
        let len = self.items.len();
        let index = (self.current + len - 1) % len;
        self.navigate(index)
    }

    /// Jump to the item behind dot `index`
    pub fn select(&mut self, index: usize) -> Vec<CarouselCommand> {
        if !self.is_active() || index >= self.items.len() {
            return Vec::new();
        }
        self.navigate(index)
    }

    fn navigate(&mut self, index: usize) -> Vec<CarouselCommand> {
        let mut commands = self.display(index, true);
        commands.extend(self.reset());
        commands
    }

    // ========================================================================
    // Rotation
    // ========================================================================

    /// Handle an expiry of the rotation interval. Ticks from a cancelled
    /// timer are ignored.
    pub fn rotation_tick(&mut self, timer: TimerId) -> Vec<CarouselCommand> {
        if !self.is_active() || self.rotation != Some(timer) {
            return Vec::new();
        }
        let index = (self.current + 1) % self.items.len();
        self.display(index, true)
    }

    /// Pointer entered the carousel: disarm rotation until [`Self::resume`].
    /// Hover is remembered before the load so rotation starts paused.
    pub fn pause(&mut self) -> Vec<CarouselCommand> {
        self.mode = RotationMode::Paused;
        self.cancel_rotation().into_iter().collect()
    }

    /// Pointer left the carousel: arm a fresh rotation timer
    pub fn resume(&mut self) -> Vec<CarouselCommand> {
        self.mode = RotationMode::Running;
        if !self.is_active() {
            return Vec::new();
        }
        self.start_rotation()
    }

    /// Restart the rotation interval from zero. Does nothing while paused.
    pub fn reset(&mut self) -> Vec<CarouselCommand> {
        if !self.is_active() || self.mode == RotationMode::Paused {
            return Vec::new();
        }
        self.start_rotation()
    }

    fn start_rotation(&mut self) -> Vec<CarouselCommand> {
        let mut commands: Vec<_> = self.cancel_rotation().into_iter().collect();
        let timer = TimerId(self.bump_id());
        self.rotation = Some(timer);
        commands.push(CarouselCommand::StartRotation {
            timer,
            period: ROTATION_INTERVAL,
        });
        commands
    }

    fn cancel_rotation(&mut self) -> Option<CarouselCommand> {
        self.rotation
            .take()
            .map(|timer| CarouselCommand::CancelRotation { timer })
    }

    fn cancel_transition(&mut self) -> Option<CarouselCommand> {
        let token = match std::mem::take(&mut self.transition) {
            TransitionPhase::Idle => return None,
            TransitionPhase::Hiding { token, .. } | TransitionPhase::Swapped { token } => token,
        };
        Some(CarouselCommand::CancelTransition { token })
    }

    fn next_token(&mut self) -> TransitionToken {
        TransitionToken(self.bump_id())
    }

    fn bump_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<Testimonial> {
        (0..n)
            .map(|i| Testimonial::new(format!("Quote {}", i), format!("Client {}", i)))
            .collect()
    }

    fn loaded(n: usize) -> Carousel {
        let mut carousel = Carousel::new();
        carousel.load(Ok(items(n)));
        carousel
    }

    /// Run the pending transition to completion
    fn settle(carousel: &mut Carousel) {
        for _ in 0..4 {
            match carousel.transition() {
                TransitionPhase::Idle => return,
                TransitionPhase::Hiding { token, .. } | TransitionPhase::Swapped { token } => {
                    carousel.transition_elapsed(token);
                }
            }
        }
    }

    // ========================================================================
    // Load
    // ========================================================================

    #[test]
    fn test_new_is_uninitialized() {
        let carousel = Carousel::new();
        assert_eq!(carousel.status(), CarouselStatus::Uninitialized);
        assert!(carousel.first_render);
        assert_eq!(carousel.current_index(), None);
        assert!(carousel.dots().is_empty());
        assert!(carousel.displayed().is_none());
    }

    #[test]
    fn test_load_activates_at_first_item() {
        let mut carousel = Carousel::new();
        let commands = carousel.load(Ok(items(3)));

        assert_eq!(carousel.status(), CarouselStatus::Active);
        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(carousel.dots(), vec![true, false, false]);
        assert_eq!(carousel.displayed().unwrap().name, "Client 0");
        assert!(!carousel.first_render);
        assert!(!carousel.is_content_hidden());

        let timer = carousel.rotation_timer().unwrap();
        assert_eq!(
            commands,
            vec![CarouselCommand::StartRotation {
                timer,
                period: ROTATION_INTERVAL
            }]
        );
    }

    #[test]
    fn test_load_empty_fails() {
        let mut carousel = Carousel::new();
        let commands = carousel.load(Ok(Vec::new()));

        assert!(commands.is_empty());
        assert!(carousel.is_failed());
        assert!(carousel.dots().is_empty());
        assert!(carousel.rotation_timer().is_none());
    }

    #[test]
    fn test_load_error_fails() {
        let mut carousel = Carousel::new();
        let commands = carousel.load(Err(TestimonialError::Unavailable("offline".into())));

        assert!(commands.is_empty());
        assert!(carousel.is_failed());
    }

    #[test]
    fn test_load_only_once() {
        let mut carousel = loaded(2);
        let commands = carousel.load(Ok(items(5)));
        assert!(commands.is_empty());
        assert_eq!(carousel.dots().len(), 2);

        let mut failed = Carousel::new();
        failed.load(Ok(Vec::new()));
        assert!(failed.load(Ok(items(2))).is_empty());
        assert!(failed.is_failed());
    }

    #[test]
    fn test_hover_before_load_starts_paused() {
        let mut carousel = Carousel::new();
        assert!(carousel.pause().is_empty());

        let commands = carousel.load(Ok(items(3)));
        assert!(commands.is_empty());
        assert_eq!(carousel.current_index(), Some(0));
        assert_eq!(carousel.mode(), RotationMode::Paused);
        assert!(carousel.rotation_timer().is_none());

        let commands = carousel.resume();
        let timer = carousel.rotation_timer().unwrap();
        assert_eq!(
            commands,
            vec![CarouselCommand::StartRotation {
                timer,
                period: ROTATION_INTERVAL
            }]
        );
    }

    #[test]
    fn test_hover_left_before_load_rotates() {
        let mut carousel = Carousel::new();
        carousel.pause();
        assert!(carousel.resume().is_empty());

        carousel.load(Ok(items(3)));
        assert_eq!(carousel.mode(), RotationMode::Running);
        assert!(carousel.rotation_timer().is_some());
    }

    #[test]
    fn test_failed_is_inert() {
        let mut carousel = Carousel::new();
        carousel.load(Ok(Vec::new()));

        assert!(carousel.next().is_empty());
        assert!(carousel.previous().is_empty());
        assert!(carousel.select(0).is_empty());
        assert!(carousel.pause().is_empty());
        assert!(carousel.resume().is_empty());
        assert!(carousel.reset().is_empty());
        assert!(carousel.rotation_timer().is_none());
    }

    #[test]
    fn test_navigation_before_load_is_ignored() {
        let mut carousel = Carousel::new();
        assert!(carousel.next().is_empty());
        assert!(carousel.display(0, false).is_empty());
        assert_eq!(carousel.status(), CarouselStatus::Uninitialized);
    }

    // ========================================================================
    // Display
    // ========================================================================

    #[test]
    fn test_display_without_animation_is_immediate() {
        let mut carousel = loaded(3);
        let commands = carousel.display(2, false);

        assert!(commands.is_empty());
        assert_eq!(carousel.displayed().unwrap().name, "Client 2");
        assert!(!carousel.is_content_hidden());
    }

    #[test]
    fn test_display_out_of_range_is_ignored() {
        let mut carousel = loaded(3);
        assert!(carousel.display(3, true).is_empty());
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn test_animated_display_phases() {
        let mut carousel = loaded(3);
        let commands = carousel.display(1, true);

        let TransitionPhase::Hiding { token, target } = carousel.transition() else {
            panic!("expected hiding phase");
        };
        assert_eq!(target, 1);
        assert_eq!(
            commands,
            vec![CarouselCommand::ScheduleTransition {
                token,
                delay: HIDE_DURATION
            }]
        );
        // Hidden but old text still in place; dot already moved
        assert!(carousel.is_content_hidden());
        assert_eq!(carousel.displayed().unwrap().name, "Client 0");
        assert_eq!(carousel.dots(), vec![false, true, false]);

        let commands = carousel.transition_elapsed(token);
        let TransitionPhase::Swapped { token: reveal } = carousel.transition() else {
            panic!("expected swapped phase");
        };
        assert_eq!(
            commands,
            vec![CarouselCommand::ScheduleTransition {
                token: reveal,
                delay: REVEAL_DELAY
            }]
        );
        assert!(carousel.is_content_hidden());
        assert_eq!(carousel.displayed().unwrap().name, "Client 1");

        assert!(carousel.transition_elapsed(reveal).is_empty());
        assert!(!carousel.is_content_hidden());
        assert_eq!(carousel.transition(), TransitionPhase::Idle);
    }

    #[test]
    fn test_stale_transition_token_is_ignored() {
        let mut carousel = loaded(3);
        carousel.display(1, true);
        let TransitionPhase::Hiding { token, .. } = carousel.transition() else {
            panic!("expected hiding phase");
        };
        carousel.transition_elapsed(token);

        // Replaying the hide token does nothing
        assert!(carousel.transition_elapsed(token).is_empty());
        assert!(matches!(
            carousel.transition(),
            TransitionPhase::Swapped { .. }
        ));
    }

    #[test]
    fn test_display_while_hiding_retargets() {
        let mut carousel = loaded(4);
        carousel.display(1, true);
        let TransitionPhase::Hiding { token, .. } = carousel.transition() else {
            panic!("expected hiding phase");
        };

        let commands = carousel.display(3, true);
        assert!(commands.is_empty());
        assert_eq!(carousel.transition(), TransitionPhase::Hiding { token, target: 3 });
        assert_eq!(carousel.displayed().unwrap().name, "Client 0");

        settle(&mut carousel);
        assert_eq!(carousel.displayed().unwrap().name, "Client 3");
        assert_eq!(carousel.current_index(), Some(3));
    }

    #[test]
    fn test_display_while_swapped_swaps_hidden_content() {
        let mut carousel = loaded(4);
        carousel.display(1, true);
        let TransitionPhase::Hiding { token, .. } = carousel.transition() else {
            panic!("expected hiding phase");
        };
        carousel.transition_elapsed(token);
        let swapped = carousel.transition();

        let commands = carousel.display(2, true);
        assert!(commands.is_empty());
        assert_eq!(carousel.transition(), swapped);
        assert!(carousel.is_content_hidden());
        assert_eq!(carousel.displayed().unwrap().name, "Client 2");
    }

    #[test]
    fn test_immediate_display_cancels_transition() {
        let mut carousel = loaded(3);
        carousel.display(1, true);
        let TransitionPhase::Hiding { token, .. } = carousel.transition() else {
            panic!("expected hiding phase");
        };

        let commands = carousel.display(2, false);
        assert_eq!(commands, vec![CarouselCommand::CancelTransition { token }]);
        assert_eq!(carousel.transition(), TransitionPhase::Idle);
        assert_eq!(carousel.displayed().unwrap().name, "Client 2");
        assert!(carousel.transition_elapsed(token).is_empty());
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    #[test]
    fn test_next_and_previous_wrap() {
        let mut carousel = loaded(3);

        carousel.previous();
        assert_eq!(carousel.current_index(), Some(2));
        carousel.next();
        assert_eq!(carousel.current_index(), Some(0));
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current_index(), Some(2));
        carousel.next();
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn test_next_previous_are_inverse() {
        for len in 1..=5 {
            for start in 0..len {
                let mut carousel = loaded(len);
                carousel.display(start, false);

                carousel.next();
                carousel.previous();
                assert_eq!(carousel.current_index(), Some(start), "len={len}");

                carousel.previous();
                carousel.next();
                assert_eq!(carousel.current_index(), Some(start), "len={len}");
            }
        }
    }

    #[test]
    fn test_single_item_navigation_stays_put() {
        let mut carousel = loaded(1);
        carousel.next();
        assert_eq!(carousel.current_index(), Some(0));
        carousel.previous();
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn test_navigation_resets_rotation() {
        let mut carousel = loaded(3);
        let first = carousel.rotation_timer().unwrap();

        let commands = carousel.next();
        let second = carousel.rotation_timer().unwrap();
        assert_ne!(first, second);
        assert!(commands.contains(&CarouselCommand::CancelRotation { timer: first }));
        assert!(commands.contains(&CarouselCommand::StartRotation {
            timer: second,
            period: ROTATION_INTERVAL
        }));

        let cancel_pos = commands
            .iter()
            .position(|c| matches!(c, CarouselCommand::CancelRotation { .. }))
            .unwrap();
        let start_pos = commands
            .iter()
            .position(|c| matches!(c, CarouselCommand::StartRotation { .. }))
            .unwrap();
        assert!(cancel_pos < start_pos);
    }

    #[test]
    fn test_select_dot() {
        let mut carousel = loaded(4);
        let commands = carousel.select(2);

        assert_eq!(carousel.current_index(), Some(2));
        assert_eq!(carousel.dots(), vec![false, false, true, false]);
        assert!(commands
            .iter()
            .any(|c| matches!(c, CarouselCommand::StartRotation { .. })));

        assert!(carousel.select(9).is_empty());
        assert_eq!(carousel.current_index(), Some(2));
    }

    // ========================================================================
    // Rotation
    // ========================================================================

    #[test]
    fn test_rotation_tick_advances() {
        let mut carousel = loaded(3);
        let timer = carousel.rotation_timer().unwrap();

        let commands = carousel.rotation_tick(timer);
        assert_eq!(carousel.current_index(), Some(1));
        assert_eq!(carousel.rotation_timer(), Some(timer));
        assert!(commands
            .iter()
            .all(|c| matches!(c, CarouselCommand::ScheduleTransition { .. })));
    }

    #[test]
    fn test_stale_rotation_tick_is_ignored() {
        let mut carousel = loaded(3);
        let old = carousel.rotation_timer().unwrap();
        carousel.next();

        assert!(carousel.rotation_tick(old).is_empty());
        assert_eq!(carousel.current_index(), Some(1));
    }

    #[test]
    fn test_pause_and_resume() {
        let mut carousel = loaded(3);
        let timer = carousel.rotation_timer().unwrap();

        let commands = carousel.pause();
        assert_eq!(commands, vec![CarouselCommand::CancelRotation { timer }]);
        assert_eq!(carousel.mode(), RotationMode::Paused);
        assert!(carousel.rotation_timer().is_none());
        assert_eq!(carousel.current_index(), Some(0));

        let commands = carousel.resume();
        let fresh = carousel.rotation_timer().unwrap();
        assert_eq!(
            commands,
            vec![CarouselCommand::StartRotation {
                timer: fresh,
                period: ROTATION_INTERVAL
            }]
        );
        assert_eq!(carousel.mode(), RotationMode::Running);
    }

    #[test]
    fn test_navigation_while_paused_stays_paused() {
        let mut carousel = loaded(3);
        carousel.pause();

        let commands = carousel.next();
        assert_eq!(carousel.current_index(), Some(1));
        assert!(carousel.rotation_timer().is_none());
        assert!(!commands
            .iter()
            .any(|c| matches!(c, CarouselCommand::StartRotation { .. })));
    }

    #[test]
    fn test_double_pause_cancels_once() {
        let mut carousel = loaded(2);
        assert_eq!(carousel.pause().len(), 1);
        assert!(carousel.pause().is_empty());
    }

    #[test]
    fn test_constants() {
        assert_eq!(ROTATION_INTERVAL, Duration::from_millis(5000));
        assert_eq!(HIDE_DURATION, Duration::from_millis(300));
        assert_eq!(REVEAL_DELAY, Duration::from_millis(50));
    }
}
