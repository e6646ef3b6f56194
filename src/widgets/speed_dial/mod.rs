// SPDX-License-Identifier: MPL-2.0

//! Speed dial widget: an expandable floating action button.
//!
//! A primary circular button that, when activated, reveals a vertical stack
//! of secondary action buttons with staggered enter/exit animations, an
//! optional dimming overlay, and a keyed icon/label transition on the
//! primary button.
//!
//! The widget follows the toolkit's Elm architecture: the parent owns a
//! [`SpeedDialState`], the view emits [`SpeedDialMessage`]s wrapped into the
//! parent's message type, and the state's update path returns [`DialEvent`]s
//! in place of the lifecycle callbacks a retained-mode toolkit would take.
//!
//! # Example
//!
//! ```ignore
//! use crate::widgets::speed_dial::{
//!     DialEvent, SpeedDial, SpeedDialAction, SpeedDialMessage, SpeedDialState,
//! };
//!
//! // In your app state
//! struct AppModel {
//!     dial: SpeedDialState,
//! }
//!
//! // In your message enum
//! enum Message {
//!     Dial(SpeedDialMessage),
//! }
//!
//! // In your view function, stacked over the page content
//! fn view(&self) -> Element<'_, Message> {
//!     SpeedDial::new(&self.dial, Message::Dial)
//!         .icon("list-add-symbolic")
//!         .active_icon("window-close-symbolic")
//!         .into()
//! }
//!
//! // In your update function
//! fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Dial(dial_msg) => {
//!             for event in self.dial.update(dial_msg) {
//!                 match event {
//!                     DialEvent::ActionActivated(index) => { /* run the action */ }
//!                     DialEvent::Opened | DialEvent::Closed | DialEvent::Pressed => {}
//!                 }
//!             }
//!         }
//!     }
//!     Task::none()
//! }
//!
//! // In your subscription, deliver frame ticks while animating
//! fn subscription(&self) -> Subscription<Message> {
//!     if self.dial.is_animating() {
//!         cosmic::iced::time::every(std::time::Duration::from_millis(16))
//!             .map(|instant| Message::Dial(SpeedDialMessage::Tick(instant)))
//!     } else {
//!         Subscription::none()
//!     }
//! }
//! ```

mod action;
mod message;
mod stagger;
mod state;
mod widget;

pub use action::{ActionStyle, Orientation, SpeedDialAction};
pub use message::{DialEvent, SpeedDialMessage};
pub use stagger::{Easing, Interval};
pub use state::{LONG_PRESS, SpeedDialState};
pub use widget::SpeedDial;
