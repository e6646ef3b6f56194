// SPDX-License-Identifier: MPL-2.0

//! Settings page view for the speed dial demo.

use crate::app::{AppModel, Message};
use crate::fl;
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget::{self, icon};
use cosmic_speed_dial::Orientation;

/// View for the Settings page
pub fn view(app: &AppModel, space_s: u16, space_m: u16) -> Element<'_, Message> {
    let header = widget::text::title1(fl!("settings"));

    let selected_orientation = match app.config.orientation {
        Orientation::Up => 0,
        Orientation::Down => 1,
    };

    let speed = app.config.animation_speed as u32;

    let layout_section = cosmic::widget::settings::section()
        .title(fl!("layout"))
        .add(
            cosmic::widget::settings::item::builder(fl!("orientation"))
                .description(fl!("orientation-description"))
                .control(
                    widget::dropdown(
                        &app.orientation_labels,
                        Some(selected_orientation),
                        Message::OrientationSelected,
                    )
                    .width(Length::Fixed(160.0)),
                ),
        )
        .add(
            cosmic::widget::settings::item::builder(fl!("action-count"))
                .description(fl!("action-count-description"))
                .control(
                    widget::row::with_capacity(3)
                        .push(
                            widget::button::icon(icon::from_name("list-remove-symbolic"))
                                .on_press_maybe(
                                    (app.config.action_count > 0).then(|| {
                                        Message::ActionCountChanged(app.config.action_count - 1)
                                    }),
                                ),
                        )
                        .push(widget::text::body(app.config.action_count.to_string()))
                        .push(
                            widget::button::icon(icon::from_name("list-add-symbolic")).on_press(
                                Message::ActionCountChanged(app.config.action_count + 1),
                            ),
                        )
                        .spacing(space_s)
                        .align_y(Alignment::Center),
                ),
        );

    let behavior_section = cosmic::widget::settings::section()
        .title(fl!("behavior"))
        .add(
            cosmic::widget::settings::item::builder(fl!("animation-speed"))
                .description(format!("{} {speed} ms", fl!("animation-speed-description")))
                .control(
                    widget::slider(50..=500u32, speed, Message::AnimationSpeedChanged)
                        .width(200.0),
                ),
        )
        .add(
            cosmic::widget::settings::item::builder(fl!("close-manually"))
                .description(fl!("close-manually-description"))
                .control(
                    widget::toggler(app.config.close_manually)
                        .on_toggle(Message::CloseManuallyToggled),
                ),
        )
        .add(
            cosmic::widget::settings::item::builder(fl!("direct-press"))
                .description(fl!("direct-press-description"))
                .control(
                    widget::toggler(app.config.direct_press).on_toggle(Message::DirectPressToggled),
                ),
        );

    let content = widget::column::with_capacity(3)
        .push(header)
        .push(layout_section)
        .push(behavior_section)
        .spacing(space_m)
        .width(Length::Fill);

    widget::container(widget::scrollable(content))
        .padding(space_m)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
