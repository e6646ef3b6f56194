// SPDX-License-Identifier: MPL-2.0

//! Speed dial widget builder and rendering.

use super::action::{ActionStyle, Orientation, SpeedDialAction};
use super::message::SpeedDialMessage;
use super::stagger::{Easing, Interval, lerp};
use super::state::SpeedDialState;
use cosmic::iced::border::Radius;
use cosmic::iced::{Alignment, Background, Border, Color, Length, Padding};
use cosmic::iced_widget::Stack;
use cosmic::iced_widget::container::Style as ContainerStyle;
use cosmic::prelude::*;
use cosmic::widget::{self, icon};

/// Builder for the speed dial widget.
///
/// Rebuilt by the parent on every `view()`; all behavioral state lives in
/// [`SpeedDialState`], while this builder carries the visual configuration.
///
/// # Example
///
/// ```ignore
/// SpeedDial::new(&self.dial, Message::Dial)
///     .orientation(Orientation::Up)
///     .icon("list-add-symbolic")
///     .active_icon("window-close-symbolic")
///     .tooltip("Actions")
///     .into()
/// ```
pub struct SpeedDial<'a, Message> {
    state: &'a SpeedDialState,
    on_message: Box<dyn Fn(SpeedDialMessage) -> Message + 'a>,
    orientation: Orientation,
    margin: (f32, f32),
    icon_name: String,
    active_icon: Option<String>,
    label: Option<String>,
    active_label: Option<String>,
    tooltip: Option<String>,
    primary_color: Option<Color>,
    overlay_color: Option<Color>,
    overlay_opacity: f32,
    icon_size: u16,
    action_icon_size: u16,
    action_style: ActionStyle,
    easing: Easing,
    visible: bool,
}

impl<'a, Message> SpeedDial<'a, Message>
where
    Message: Clone + 'static,
{
    /// Creates a new speed dial widget.
    ///
    /// # Arguments
    ///
    /// - `state`: The dial state (owned by the parent)
    /// - `on_message`: Function to wrap [`SpeedDialMessage`] into the
    ///   parent's `Message` type
    pub fn new(
        state: &'a SpeedDialState,
        on_message: impl Fn(SpeedDialMessage) -> Message + 'a,
    ) -> Self {
        Self {
            state,
            on_message: Box::new(on_message),
            orientation: Orientation::Up,
            margin: (16.0, 16.0),
            icon_name: String::from("list-add-symbolic"),
            active_icon: None,
            label: None,
            active_label: None,
            tooltip: None,
            primary_color: None,
            overlay_color: None,
            overlay_opacity: 0.5,
            icon_size: 24,
            action_icon_size: 16,
            action_style: ActionStyle::Standard,
            easing: Easing::Linear,
            visible: true,
        }
    }

    /// Sets the direction the dial expands in. Default is `Up`.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the margins from the end edge and from the anchored edge
    /// (bottom for `Up`, top for `Down`). Default is 16/16.
    pub fn margin(mut self, end: f32, edge: f32) -> Self {
        self.margin = (end, edge);
        self
    }

    /// Sets the primary button's icon while the dial is closed.
    ///
    /// Default is `list-add-symbolic`.
    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon_name = name.into();
        self
    }

    /// Sets the primary button's icon while the dial is open.
    ///
    /// When absent the closed icon is shown in both states and no keyed
    /// transition plays.
    pub fn active_icon(mut self, name: impl Into<String>) -> Self {
        self.active_icon = Some(name.into());
        self
    }

    /// Sets the label chip shown beside the primary button while closed.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the label chip shown beside the primary button while open.
    pub fn active_label(mut self, label: impl Into<String>) -> Self {
        self.active_label = Some(label.into());
        self
    }

    /// Sets the tooltip on the primary button.
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Overrides the primary button's background color.
    ///
    /// Default is the theme's accent color.
    pub fn primary_color(mut self, color: Color) -> Self {
        self.primary_color = Some(color);
        self
    }

    /// Sets the dimming overlay color. Default is black.
    pub fn overlay_color(mut self, color: Color) -> Self {
        self.overlay_color = Some(color);
        self
    }

    /// Sets the overlay's opacity when the dial is fully open.
    ///
    /// Default is 0.5. The effective opacity follows the shared clock, so
    /// the overlay fades in with the expand and out with the collapse.
    pub fn overlay_opacity(mut self, opacity: f32) -> Self {
        self.overlay_opacity = opacity;
        self
    }

    /// Sets the primary button's icon size in pixels. Default is 24.
    pub fn icon_size(mut self, size: u16) -> Self {
        self.icon_size = size;
        self
    }

    /// Sets the fully revealed size of action icons. Default is 16.
    pub fn action_icon_size(mut self, size: u16) -> Self {
        self.action_icon_size = size;
        self
    }

    /// Sets the button style used for actions without a per-action
    /// override. Default is `Standard`.
    pub fn action_style(mut self, style: ActionStyle) -> Self {
        self.action_style = style;
        self
    }

    /// Sets the easing curve applied to the shared clock. Default is
    /// `Linear`.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Hides the dial entirely when set to `false`.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Renders the dimming overlay behind the expanded actions.
    ///
    /// Tapping it goes through the same toggle path as the primary button.
    fn overlay(&self, revealed: f32) -> Element<'a, Message> {
        let base = self.overlay_color.unwrap_or(Color::BLACK);
        let alpha = (self.overlay_opacity * revealed).clamp(0.0, 1.0);
        let scrim_color = Color { a: alpha, ..base };

        let scrim = widget::container(widget::Space::with_width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .class(cosmic::style::Container::custom(move |_theme| {
                ContainerStyle {
                    background: Some(Background::Color(scrim_color)),
                    ..ContainerStyle::default()
                }
            }));

        widget::mouse_area(scrim)
            .on_press((self.on_message)(SpeedDialMessage::OverlayPressed))
            .into()
    }

    /// Renders the always-visible primary button, with the keyed icon and
    /// label swap driven by the state's icon-transition progress.
    fn primary_button(&self) -> Element<'a, Message> {
        let space_s = cosmic::theme::spacing().space_s;
        let open_key = self.state.icon_progress() >= 0.5;

        let icon_name = if open_key {
            self.active_icon
                .clone()
                .unwrap_or_else(|| self.icon_name.clone())
        } else {
            self.icon_name.clone()
        };

        let override_color = self.primary_color;
        let fab = widget::container(icon::from_name(icon_name).size(self.icon_size))
            .padding(16)
            .class(cosmic::style::Container::custom(move |theme| {
                let cosmic = theme.cosmic();
                let background =
                    override_color.unwrap_or_else(|| srgba_to_color(cosmic.accent_color()));
                let on_background = srgba_to_color(cosmic.on_accent_color());
                let radii = cosmic.corner_radii.radius_xl;
                ContainerStyle {
                    icon_color: Some(on_background),
                    text_color: Some(on_background),
                    background: Some(Background::Color(background)),
                    border: Border {
                        radius: Radius {
                            top_left: radii[0],
                            top_right: radii[1],
                            bottom_right: radii[2],
                            bottom_left: radii[3],
                        },
                        ..Border::default()
                    },
                    ..ContainerStyle::default()
                }
            }));

        let fab: Element<'a, Message> = if let Some(tip) = self.tooltip.clone() {
            widget::tooltip(fab, widget::text::body(tip), widget::tooltip::Position::Left).into()
        } else {
            fab.into()
        };

        let fab = widget::mouse_area(fab)
            .on_press((self.on_message)(SpeedDialMessage::PrimaryPressed))
            .on_release((self.on_message)(SpeedDialMessage::PrimaryReleased));

        let label_text = if open_key {
            self.active_label.clone().or_else(|| self.label.clone())
        } else {
            self.label.clone()
        };

        match label_text {
            Some(text) => widget::row::with_capacity(2)
                .push(label_chip(text))
                .push(fab)
                .spacing(space_s)
                .align_y(Alignment::Center)
                .into(),
            None => fab.into(),
        }
    }

    /// Renders a single action with its label chip, sized by the action's
    /// own sub-interval of the shared clock.
    fn action_row(
        &self,
        index: usize,
        action: &SpeedDialAction,
        revealed: f32,
        open: bool,
        count: usize,
    ) -> Element<'a, Message> {
        let space_s = cosmic::theme::spacing().space_s;
        let sub = Interval::child(index, count).remap(revealed);
        let size = lerp(0.0, f32::from(self.action_icon_size), sub)
            .round()
            .max(1.0) as u16;
        let class = action.style.unwrap_or(self.action_style).class();

        let mut button =
            widget::button::icon(icon::from_name(action.icon.clone()).size(size)).class(class);
        if open {
            // Interaction is gated on the open intent, not per-action
            // progress: an action is tappable as soon as the dial is open,
            // even mid-reveal.
            button = button.on_press((self.on_message)(SpeedDialMessage::ActionPressed(index)));
        }

        let mut row = widget::row::with_capacity(2)
            .spacing(space_s)
            .align_y(Alignment::Center);
        if let Some(label) = action.label.clone() {
            // Label chips appear once the action is mostly revealed.
            if sub > 0.5 {
                row = row.push(label_chip(label));
            }
        }
        row.push(button).into()
    }

    /// Renders the dial column (actions plus primary button) anchored to
    /// the configured corner of the available area.
    fn dial(&self, revealed: f32) -> Element<'a, Message> {
        let space_s = cosmic::theme::spacing().space_s;
        let count = self.state.action_count();
        let open = self.state.is_open();
        let reveal_actions = count > 0 && (open || revealed > 0.0);

        // The last-defined action always sits closest to the primary
        // button, in both orientations.
        let mut entries: Vec<Element<'a, Message>> = Vec::with_capacity(count + 1);
        match self.orientation {
            Orientation::Up => {
                if reveal_actions {
                    for (index, action) in self.state.actions().iter().enumerate() {
                        entries.push(self.action_row(index, action, revealed, open, count));
                    }
                }
                entries.push(self.primary_button());
            }
            Orientation::Down => {
                entries.push(self.primary_button());
                if reveal_actions {
                    for (index, action) in self.state.actions().iter().enumerate().rev() {
                        entries.push(self.action_row(index, action, revealed, open, count));
                    }
                }
            }
        }

        let column = widget::column::with_children(entries)
            .spacing(space_s)
            .align_x(Alignment::End);

        let (vertical, padding) = match self.orientation {
            Orientation::Up => (
                Alignment::End,
                Padding {
                    bottom: self.margin.1,
                    right: self.margin.0,
                    ..Padding::ZERO
                },
            ),
            Orientation::Down => (
                Alignment::Start,
                Padding {
                    top: self.margin.1,
                    right: self.margin.0,
                    ..Padding::ZERO
                },
            ),
        };

        widget::container(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::End)
            .align_y(vertical)
            .padding(padding)
            .into()
    }

    /// Builds the widget and returns it as an Element.
    ///
    /// The element fills the available area so the dial can anchor to its
    /// corner; stack it over the page content.
    pub fn build(self) -> Element<'a, Message> {
        if !self.visible {
            return widget::Space::with_width(Length::Shrink).into();
        }

        let revealed = self.easing.apply(self.state.progress());

        let mut layers: Vec<Element<'a, Message>> = Vec::with_capacity(2);
        if self.state.shows_overlay() && (self.state.is_open() || revealed > 0.0) {
            layers.push(self.overlay(revealed));
        }
        layers.push(self.dial(revealed));

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Caption text in a card container, used for action and primary labels.
fn label_chip<'a, Message: 'a>(text: String) -> Element<'a, Message> {
    widget::container(widget::text::caption(text))
        .padding([4, 8])
        .class(cosmic::style::Container::Card)
        .into()
}

fn srgba_to_color(srgba: cosmic::cosmic_theme::palette::Srgba) -> Color {
    Color::from_rgba(srgba.red, srgba.green, srgba.blue, srgba.alpha)
}

impl<'a, Message> From<SpeedDial<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'static,
{
    fn from(dial: SpeedDial<'a, Message>) -> Self {
        dial.build()
    }
}
