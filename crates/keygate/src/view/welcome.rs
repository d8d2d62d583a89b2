//! Screen shown after a successful login.

use iced::widget::{button, column, text};
use iced::{Element, Length};
use keygate_core::Account;

use crate::message::Message;
use crate::style::widgets;
use crate::style::widgets::palette;

/// Render the welcome screen for `account`.
pub fn view_welcome(account: &Account) -> Element<'_, Message> {
    let p = palette::current();

    column![
        text("\u{1F513}").size(40).color(p.primary),
        text(format!("Welcome {}!", account.username))
            .size(22)
            .color(p.text_primary),
        text("You have successfully logged in.")
            .size(14)
            .color(p.text_secondary),
        button(text("Log Out").size(14))
            .on_press(Message::LogOut)
            .padding([10, 20])
            .width(Length::Fill)
            .style(widgets::primary_button_style),
    ]
    .spacing(16)
    .align_x(iced::Alignment::Center)
    .into()
}
