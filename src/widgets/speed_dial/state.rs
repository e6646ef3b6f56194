// SPDX-License-Identifier: MPL-2.0

//! State management for the speed dial widget.

use std::time::{Duration, Instant};

use super::action::SpeedDialAction;
use super::message::{DialEvent, SpeedDialMessage};

/// How long the primary button must be held for the release to count as a
/// long press. A long press always toggles the dial, even when the caller
/// wired a direct press action.
pub const LONG_PRESS: Duration = Duration::from_millis(500);

const DEFAULT_SPEED_MS: u64 = 150;

/// Expand/collapse duration for the given animation speed and action count.
///
/// More actions stretch the shared timeline so the per-action stagger keeps
/// a constant feel: `speed + round(speed / 5) * count` milliseconds.
fn expand_duration(speed_ms: u64, count: usize) -> Duration {
    let per_child = (speed_ms as f64 / 5.0).round() as u64;
    Duration::from_millis(speed_ms + per_child * count as u64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Reverse,
}

/// The single shared animation timeline.
///
/// All dependent progress values (overlay opacity, per-action reveal, icon
/// transition) derive from this clock. Reversing direction mid-flight is
/// safe at any progress value; the clock resumes from where it is.
#[derive(Debug, Clone)]
struct AnimationClock {
    progress: f32,
    duration: Duration,
    direction: Direction,
}

impl AnimationClock {
    fn new(duration: Duration) -> Self {
        Self {
            progress: 0.0,
            duration,
            direction: Direction::Forward,
        }
    }

    fn run(&mut self, direction: Direction) {
        self.direction = direction;
    }

    fn advance(&mut self, dt: f32) {
        let span = self.duration.as_secs_f32().max(f32::EPSILON);
        let delta = dt / span;
        self.progress = match self.direction {
            Direction::Forward => (self.progress + delta).min(1.0),
            Direction::Reverse => (self.progress - delta).max(0.0),
        };
    }

    fn at_rest(&self) -> bool {
        match self.direction {
            Direction::Forward => self.progress >= 1.0,
            Direction::Reverse => self.progress <= 0.0,
        }
    }
}

/// State for the speed dial widget.
///
/// This state is owned by the parent component and passed to the widget by
/// reference on every `view()`. It holds the open/closed intent, the shared
/// animation clock trailing it, the ordered action list, and the behavioral
/// configuration that affects dispatch rather than looks.
#[derive(Debug, Clone)]
pub struct SpeedDialState {
    actions: Vec<SpeedDialAction>,
    animation_speed: u64,
    close_manually: bool,
    has_press_action: bool,
    is_open: bool,
    clock: AnimationClock,
    /// Progress of the primary button's icon/label transition, running on
    /// its own `animation_speed` duration rather than the child-count-scaled
    /// expand duration. 0 = closed key, 1 = open key.
    icon_progress: f32,
    last_tick: Option<Instant>,
    pressed_at: Option<Instant>,
}

impl Default for SpeedDialState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl SpeedDialState {
    /// Creates a new state with the given actions.
    pub fn new(actions: Vec<SpeedDialAction>) -> Self {
        let clock = AnimationClock::new(expand_duration(DEFAULT_SPEED_MS, actions.len()));
        Self {
            actions,
            animation_speed: DEFAULT_SPEED_MS,
            close_manually: false,
            has_press_action: false,
            is_open: false,
            clock,
            icon_progress: 0.0,
            last_tick: None,
            pressed_at: None,
        }
    }

    /// Replaces the action list, recomputing the expand duration.
    ///
    /// In-flight progress is preserved; only the future tick rate changes.
    /// Emptying the list while open snaps the dial shut, since there is
    /// nothing left to reveal.
    pub fn set_actions(&mut self, actions: Vec<SpeedDialAction>) {
        self.actions = actions;
        self.clock.duration = expand_duration(self.animation_speed, self.actions.len());
        if self.actions.is_empty() && self.is_open {
            self.is_open = false;
            self.clock.progress = 0.0;
            self.clock.run(Direction::Reverse);
            self.last_tick = None;
        }
    }

    /// Sets the base animation speed in milliseconds (default 150).
    ///
    /// This is both the base of the expand duration and the full duration of
    /// the primary button's icon/label transition.
    pub fn set_animation_speed(&mut self, speed_ms: u64) {
        self.animation_speed = speed_ms;
        self.clock.duration = expand_duration(speed_ms, self.actions.len());
    }

    /// When set, no overlay is produced and tapping an action does not
    /// auto-close the dial; the caller closes it via [`Self::sync_open`].
    pub fn set_close_manually(&mut self, close_manually: bool) {
        self.close_manually = close_manually;
    }

    /// Declares whether the caller handles [`DialEvent::Pressed`] as a
    /// direct action. When set, a short press while closed reports that
    /// event instead of toggling.
    pub fn set_has_press_action(&mut self, has_press_action: bool) {
        self.has_press_action = has_press_action;
    }

    /// Authoritative open/closed intent. Animation progress trails this.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Shared clock progress in `[0, 1]`; 1 means fully revealed.
    pub fn progress(&self) -> f32 {
        self.clock.progress
    }

    /// Progress of the primary button's keyed icon/label transition.
    pub fn icon_progress(&self) -> f32 {
        self.icon_progress
    }

    /// Whether a timer subscription should currently deliver ticks.
    pub fn is_animating(&self) -> bool {
        self.last_tick.is_some()
    }

    pub fn actions(&self) -> &[SpeedDialAction] {
        &self.actions
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn close_manually(&self) -> bool {
        self.close_manually
    }

    /// Current expand/collapse duration.
    pub fn duration(&self) -> Duration {
        self.clock.duration
    }

    pub fn animation_speed(&self) -> u64 {
        self.animation_speed
    }

    /// Whether the dimming overlay is part of the widget at all.
    pub fn shows_overlay(&self) -> bool {
        !self.close_manually && !self.actions.is_empty()
    }

    /// Entry point for messages emitted by the widget's view.
    ///
    /// Returns the events caused by the message, each exactly once.
    pub fn update(&mut self, message: SpeedDialMessage) -> Vec<DialEvent> {
        let now = Instant::now();
        match message {
            SpeedDialMessage::PrimaryPressed => {
                self.pressed_at = Some(now);
                Vec::new()
            }
            SpeedDialMessage::PrimaryReleased => {
                self.primary_released_at(now).into_iter().collect()
            }
            SpeedDialMessage::OverlayPressed => self.toggle_at(now).into_iter().collect(),
            SpeedDialMessage::ActionPressed(index) => self.action_pressed_at(index, now),
            SpeedDialMessage::Tick(instant) => {
                self.tick_at(instant);
                Vec::new()
            }
        }
    }

    /// Flips the open intent and starts the clock in the matching direction.
    ///
    /// With an empty action list there is nothing to reveal: the dial acts
    /// as a plain action button, reporting [`DialEvent::Opened`] on every
    /// activation while `is_open` stays `false`.
    pub fn toggle_at(&mut self, now: Instant) -> Option<DialEvent> {
        if self.actions.is_empty() {
            return Some(DialEvent::Opened);
        }
        if self.is_open {
            self.is_open = false;
            self.clock.run(Direction::Reverse);
            self.last_tick = Some(now);
            Some(DialEvent::Closed)
        } else {
            self.is_open = true;
            self.clock.run(Direction::Forward);
            self.last_tick = Some(now);
            Some(DialEvent::Opened)
        }
    }

    /// Reconciles an external open/close signal with the current intent.
    ///
    /// A matching value is a no-op; a diverging one goes through the same
    /// toggle path as a tap, so external and internal toggles are
    /// indistinguishable to observers. Ignored while the action list is
    /// empty, since there is no open state to converge on.
    pub fn sync_open(&mut self, open: bool, now: Instant) -> Option<DialEvent> {
        if self.actions.is_empty() || open == self.is_open {
            return None;
        }
        self.toggle_at(now)
    }

    /// Records the press timestamp for long-press classification.
    pub fn primary_pressed_at(&mut self, now: Instant) {
        self.pressed_at = Some(now);
    }

    /// Classifies a primary button release.
    ///
    /// A hold of [`LONG_PRESS`] or more always toggles. A short press while
    /// closed reports [`DialEvent::Pressed`] when the caller declared a
    /// direct press action; otherwise it toggles.
    pub fn primary_released_at(&mut self, now: Instant) -> Option<DialEvent> {
        let held = self
            .pressed_at
            .take()
            .map(|pressed| now.saturating_duration_since(pressed))
            .unwrap_or(Duration::ZERO);

        if held >= LONG_PRESS {
            return self.toggle_at(now);
        }
        if !self.is_open && self.has_press_action {
            return Some(DialEvent::Pressed);
        }
        self.toggle_at(now)
    }

    /// Handles a tap on the action at `index`.
    ///
    /// Unless `close_manually` is set the dial closes first, so a `Closed`
    /// event precedes the activation.
    pub fn action_pressed_at(&mut self, index: usize, now: Instant) -> Vec<DialEvent> {
        let mut events = Vec::with_capacity(2);
        if !self.close_manually && self.is_open {
            if let Some(event) = self.toggle_at(now) {
                events.push(event);
            }
        }
        events.push(DialEvent::ActionActivated(index));
        events
    }

    /// Advances the clock and the icon transition to `now`.
    ///
    /// Sampled across ticks, never blocking; once both timelines reach
    /// their targets the tick anchor is cleared so the caller's subscription
    /// can stop.
    pub fn tick_at(&mut self, now: Instant) {
        let Some(last) = self.last_tick else {
            return;
        };
        let dt = now.saturating_duration_since(last).as_secs_f32();
        self.clock.advance(dt);

        let icon_span = (self.animation_speed as f32 / 1000.0).max(f32::EPSILON);
        let icon_target = if self.is_open { 1.0 } else { 0.0 };
        let step = dt / icon_span;
        self.icon_progress = if self.icon_progress < icon_target {
            (self.icon_progress + step).min(icon_target)
        } else {
            (self.icon_progress - step).max(icon_target)
        };

        let icon_at_rest = (self.icon_progress - icon_target).abs() <= f32::EPSILON;
        if self.clock.at_rest() && icon_at_rest {
            self.last_tick = None;
        } else {
            self.last_tick = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::speed_dial::action::SpeedDialAction;

    fn actions(count: usize) -> Vec<SpeedDialAction> {
        (0..count)
            .map(|i| SpeedDialAction::new(format!("icon-{i}")))
            .collect()
    }

    fn t0() -> Instant {
        Instant::now()
    }

    #[test]
    fn toggle_with_no_actions_reports_open_but_stays_closed() {
        let mut state = SpeedDialState::default();
        let now = t0();

        for _ in 0..3 {
            assert_eq!(state.toggle_at(now), Some(DialEvent::Opened));
            assert!(!state.is_open());
        }
        assert!(!state.is_animating());
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn toggle_opens_and_starts_the_clock() {
        let mut state = SpeedDialState::new(actions(3));
        let now = t0();

        assert_eq!(state.toggle_at(now), Some(DialEvent::Opened));
        assert!(state.is_open());
        assert!(state.is_animating());

        state.tick_at(now + state.duration());
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn toggle_again_closes_and_reverses() {
        let mut state = SpeedDialState::new(actions(2));
        let now = t0();

        state.toggle_at(now);
        state.tick_at(now + state.duration());
        assert_eq!(state.progress(), 1.0);

        let later = now + state.duration() + Duration::from_millis(10);
        assert_eq!(state.toggle_at(later), Some(DialEvent::Closed));
        assert!(!state.is_open());

        state.tick_at(later + state.duration() / 2);
        assert!(state.progress() < 1.0);
        assert!(state.progress() > 0.0);
    }

    #[test]
    fn duration_policy_matches_speed_and_count() {
        let mut state = SpeedDialState::default();
        state.set_animation_speed(150);
        assert_eq!(state.duration(), Duration::from_millis(150));

        state.set_actions(actions(3));
        // 150 + round(150 / 5) * 3 = 150 + 30 * 3
        assert_eq!(state.duration(), Duration::from_millis(240));
    }

    #[test]
    fn duration_is_monotone_in_action_count() {
        let mut previous = Duration::ZERO;
        for count in 0..6 {
            let mut state = SpeedDialState::new(actions(count));
            state.set_animation_speed(150);
            assert!(state.duration() >= previous);
            previous = state.duration();
        }
    }

    #[test]
    fn changing_action_count_preserves_inflight_progress() {
        let mut state = SpeedDialState::new(actions(4));
        let now = t0();
        state.toggle_at(now);
        state.tick_at(now + state.duration() / 2);
        let midway = state.progress();
        assert!(midway > 0.0 && midway < 1.0);

        state.set_actions(actions(6));
        assert_eq!(state.progress(), midway);
        assert_eq!(state.duration(), expand_duration(150, 6));
    }

    #[test]
    fn sync_open_matching_value_is_a_noop() {
        let mut state = SpeedDialState::new(actions(2));
        let now = t0();

        assert_eq!(state.sync_open(false, now), None);

        state.toggle_at(now);
        assert_eq!(state.sync_open(true, now), None);
    }

    #[test]
    fn sync_open_diverging_value_toggles_once() {
        let mut state = SpeedDialState::new(actions(2));
        let now = t0();

        assert_eq!(state.sync_open(true, now), Some(DialEvent::Opened));
        assert!(state.is_open());
        assert_eq!(state.sync_open(true, now), None);

        assert_eq!(state.sync_open(false, now), Some(DialEvent::Closed));
        assert!(!state.is_open());
    }

    #[test]
    fn sync_open_is_ignored_without_actions() {
        let mut state = SpeedDialState::default();
        assert_eq!(state.sync_open(true, t0()), None);
        assert!(!state.is_open());
    }

    #[test]
    fn short_press_with_press_action_reports_pressed() {
        let mut state = SpeedDialState::new(actions(2));
        state.set_has_press_action(true);
        let now = t0();

        state.primary_pressed_at(now);
        let event = state.primary_released_at(now + Duration::from_millis(50));
        assert_eq!(event, Some(DialEvent::Pressed));
        assert!(!state.is_open());
    }

    #[test]
    fn short_press_without_press_action_toggles() {
        let mut state = SpeedDialState::new(actions(2));
        let now = t0();

        state.primary_pressed_at(now);
        let event = state.primary_released_at(now + Duration::from_millis(50));
        assert_eq!(event, Some(DialEvent::Opened));
        assert!(state.is_open());
    }

    #[test]
    fn press_while_open_always_toggles() {
        let mut state = SpeedDialState::new(actions(2));
        state.set_has_press_action(true);
        let now = t0();
        state.toggle_at(now);

        state.primary_pressed_at(now);
        let event = state.primary_released_at(now + Duration::from_millis(50));
        assert_eq!(event, Some(DialEvent::Closed));
    }

    #[test]
    fn long_press_toggles_despite_press_action() {
        let mut state = SpeedDialState::new(actions(2));
        state.set_has_press_action(true);
        let now = t0();

        state.primary_pressed_at(now);
        let event = state.primary_released_at(now + LONG_PRESS);
        assert_eq!(event, Some(DialEvent::Opened));
        assert!(state.is_open());
    }

    #[test]
    fn action_tap_closes_then_activates() {
        let mut state = SpeedDialState::new(actions(3));
        let now = t0();
        state.toggle_at(now);

        let events = state.action_pressed_at(1, now);
        assert_eq!(events, vec![DialEvent::Closed, DialEvent::ActionActivated(1)]);
        assert!(!state.is_open());
    }

    #[test]
    fn action_tap_with_manual_close_keeps_the_dial_open() {
        let mut state = SpeedDialState::new(actions(3));
        state.set_close_manually(true);
        let now = t0();
        state.toggle_at(now);

        let events = state.action_pressed_at(2, now);
        assert_eq!(events, vec![DialEvent::ActionActivated(2)]);
        assert!(state.is_open());
    }

    #[test]
    fn reversing_mid_flight_resumes_from_current_progress() {
        let mut state = SpeedDialState::new(actions(3));
        let now = t0();
        state.toggle_at(now);

        let halfway = now + state.duration() / 2;
        state.tick_at(halfway);
        let midway = state.progress();
        assert!(midway > 0.0 && midway < 1.0);

        state.toggle_at(halfway);
        let later = halfway + Duration::from_millis(20);
        state.tick_at(later);
        assert!(state.progress() < midway);
    }

    #[test]
    fn ticks_stop_once_both_timelines_settle() {
        let mut state = SpeedDialState::new(actions(1));
        let now = t0();
        state.toggle_at(now);

        // Well past both the expand duration and the icon transition.
        state.tick_at(now + Duration::from_secs(2));
        assert_eq!(state.progress(), 1.0);
        assert_eq!(state.icon_progress(), 1.0);
        assert!(!state.is_animating());
    }

    #[test]
    fn overlay_presence_follows_manual_close_and_action_count() {
        let mut state = SpeedDialState::new(actions(3));
        assert!(state.shows_overlay());

        state.set_close_manually(true);
        assert!(!state.shows_overlay());

        state.set_close_manually(false);
        state.set_actions(Vec::new());
        assert!(!state.shows_overlay());
    }

    #[test]
    fn emptying_actions_while_open_snaps_shut() {
        let mut state = SpeedDialState::new(actions(2));
        let now = t0();
        state.toggle_at(now);
        state.tick_at(now + state.duration());

        state.set_actions(Vec::new());
        assert!(!state.is_open());
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn update_routes_messages() {
        let mut state = SpeedDialState::new(actions(2));

        let events = state.update(SpeedDialMessage::OverlayPressed);
        assert_eq!(events, vec![DialEvent::Opened]);

        let events = state.update(SpeedDialMessage::ActionPressed(0));
        assert_eq!(
            events,
            vec![DialEvent::Closed, DialEvent::ActionActivated(0)]
        );
    }
}
