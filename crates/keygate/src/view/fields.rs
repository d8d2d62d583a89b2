//! Shared form field widgets.

use iced::widget::{column, text, text_input};
use iced::Element;

use crate::message::Message;
use crate::style::widgets;
use crate::style::widgets::palette;

/// Create a labeled text input.
pub fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let p = palette::current();
    column![
        text(label).size(12).color(p.text_secondary),
        text_input("", value)
            .on_input(on_input)
            .on_submit(on_submit)
            .padding(10)
            .style(widgets::field_input_style),
    ]
    .spacing(4)
    .into()
}

/// Create a labeled password input.
pub fn labeled_password<'a>(
    label: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let p = palette::current();
    column![
        text(label).size(12).color(p.text_secondary),
        text_input("", value)
            .on_input(on_input)
            .on_submit(on_submit)
            .padding(10)
            .secure(true)
            .style(widgets::field_input_style),
    ]
    .spacing(4)
    .into()
}

/// Create a status line in red or green.
pub fn status_line(message: &str, success: bool) -> Element<'_, Message> {
    let p = palette::current();
    let color = if success { p.accent_green } else { p.accent_red };
    text(message).size(13).color(color).into()
}
