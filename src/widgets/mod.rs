// SPDX-License-Identifier: MPL-2.0

//! Widgets provided by this crate.

pub mod speed_dial;

pub use speed_dial::{
    ActionStyle, DialEvent, Easing, Orientation, SpeedDial, SpeedDialAction, SpeedDialMessage,
    SpeedDialState,
};
