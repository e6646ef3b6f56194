// SPDX-License-Identifier: MPL-2.0

//! Action descriptors for the speed dial widget.

use serde::{Deserialize, Serialize};

/// Direction in which the dial expands away from the primary button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Secondary actions stack above the primary button, anchored to the
    /// bottom edge of the viewport.
    #[default]
    Up,
    /// Secondary actions stack below the primary button, anchored to the
    /// top edge of the viewport.
    Down,
}

/// Button class applied to an action, mapping onto the toolkit's themed
/// button variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActionStyle {
    #[default]
    Standard,
    Suggested,
    Destructive,
    Text,
}

impl ActionStyle {
    /// Resolves the style to the toolkit's button class.
    pub fn class(self) -> cosmic::theme::Button {
        match self {
            ActionStyle::Standard => cosmic::theme::Button::Standard,
            ActionStyle::Suggested => cosmic::theme::Button::Suggested,
            ActionStyle::Destructive => cosmic::theme::Button::Destructive,
            ActionStyle::Text => cosmic::theme::Button::Text,
        }
    }
}

/// One secondary action revealed when the dial opens.
///
/// Actions are identified by their position in the ordered list held by
/// [`super::SpeedDialState`]; they have no lifecycle of their own and are
/// replaced wholesale through `set_actions`.
#[derive(Debug, Clone)]
pub struct SpeedDialAction {
    /// Named icon shown on the action button.
    pub icon: String,
    /// Optional label chip displayed beside the button.
    pub label: Option<String>,
    /// Per-action style override; `None` falls back to the style configured
    /// on the widget builder.
    pub style: Option<ActionStyle>,
}

impl SpeedDialAction {
    /// Creates an action with an icon and no label.
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: None,
            style: None,
        }
    }

    /// Creates an action with an icon and a label chip.
    pub fn labeled(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: Some(label.into()),
            style: None,
        }
    }

    /// Sets the label chip text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Overrides the button style for this action only.
    pub fn style(mut self, style: ActionStyle) -> Self {
        self.style = Some(style);
        self
    }
}
