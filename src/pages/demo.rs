// SPDX-License-Identifier: MPL-2.0

//! Demo page view: page content with the speed dial stacked on top.

use crate::app::{AppModel, Message};
use crate::fl;
use cosmic::iced::{Alignment, Length};
use cosmic::iced_widget::Stack;
use cosmic::prelude::*;
use cosmic::widget::{self, icon};
use cosmic_speed_dial::SpeedDial;

/// View for the Demo page
pub fn view(app: &AppModel, space_s: u16, space_m: u16) -> Element<'_, Message> {
    let header = widget::text::title1(fl!("demo"));
    let description = widget::text::body(fl!("demo-description"));

    // External open/close signal, mirroring the dial's own toggles
    let controls = widget::row::with_capacity(3)
        .push(widget::text::body(fl!("external-open")))
        .push(widget::toggler(app.external_open).on_toggle(Message::ExternalOpenToggled))
        .push(
            widget::button::icon(icon::from_name("edit-clear-all-symbolic"))
                .on_press(Message::ClearLog)
                .class(cosmic::theme::Button::Standard),
        )
        .spacing(space_s)
        .align_y(Alignment::Center);

    // Event log card, most recent entry first
    let mut log = widget::column::with_capacity(app.event_log.len() + 1).spacing(space_s / 2);
    log = log.push(widget::text::heading(fl!("event-log")));
    if app.event_log.is_empty() {
        log = log.push(widget::text::caption(fl!("event-log-empty")));
    } else {
        for entry in &app.event_log {
            log = log.push(widget::text::caption(format!(
                "#{} {}",
                entry.id, entry.text
            )));
        }
    }

    let log_card = widget::container(log)
        .padding(space_s)
        .width(Length::Fill)
        .class(cosmic::style::Container::Card);

    let content = widget::column::with_capacity(4)
        .push(header)
        .push(description)
        .push(controls)
        .push(log_card)
        .spacing(space_m)
        .width(Length::Fill);

    let page = widget::container(content)
        .padding(space_m)
        .width(Length::Fill)
        .height(Length::Fill);

    let dial = SpeedDial::new(&app.dial, Message::Dial)
        .orientation(app.config.orientation)
        .icon("list-add-symbolic")
        .active_icon("window-close-symbolic")
        .label(fl!("dial-label"))
        .active_label(fl!("dial-label-open"))
        .tooltip(fl!("dial-tooltip"));

    Stack::with_children(vec![page.into(), dial.into()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
