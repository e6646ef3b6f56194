// SPDX-License-Identifier: MPL-2.0

//! Speed dial widget for libcosmic: an expandable floating action button
//! with staggered reveal animations, an optional dimming overlay, and a
//! keyed icon/label transition on the primary button.
//!
//! See [`widgets::speed_dial`] for the widget and its Elm wiring.

pub mod widgets;

pub use widgets::speed_dial::{
    ActionStyle, DialEvent, Easing, Orientation, SpeedDial, SpeedDialAction, SpeedDialMessage,
    SpeedDialState,
};
