// SPDX-License-Identifier: MPL-2.0

//! Messages emitted by the speed dial widget and events it reports back.

use std::time::Instant;

/// Messages emitted by the speed dial widget.
///
/// These messages should be wrapped by the parent's message type and fed to
/// [`super::SpeedDialState::update`] in the parent's update function.
#[derive(Debug, Clone, Copy)]
pub enum SpeedDialMessage {
    /// The primary button was pressed down.
    ///
    /// The press timestamp is recorded so the matching release can be
    /// classified as a tap or a long press.
    PrimaryPressed,

    /// The primary button was released.
    PrimaryReleased,

    /// The dimming overlay behind the expanded actions was pressed.
    OverlayPressed,

    /// A secondary action button was pressed.
    ///
    /// The index refers to the action's position in the state's action list.
    ActionPressed(usize),

    /// Animation frame tick produced by the caller's timer subscription.
    Tick(Instant),
}

/// Events reported by the state's update path.
///
/// These are the Elm rendering of the lifecycle callbacks a retained-mode
/// toolkit would take as closures: each event is returned exactly once from
/// the mutating call that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialEvent {
    /// The dial opened, or the primary button was activated while the action
    /// list is empty (plain action button mode).
    Opened,
    /// The dial closed.
    Closed,
    /// The primary button was tapped while closed and the caller declared a
    /// direct press action via `set_has_press_action`.
    Pressed,
    /// A secondary action was activated.
    ActionActivated(usize),
}
