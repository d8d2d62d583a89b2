//! View components for the application.

mod fields;
mod login;
mod register;
mod tabs;
mod welcome;

use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::style::widgets;
use crate::style::widgets::palette;

pub use login::view_login;
pub use register::view_register;
pub use tabs::view_tabs;
pub use welcome::view_welcome;

/// Width of the centered card.
const CARD_WIDTH: f32 = 380.0;

/// Wrap `content` in a titled card centered on the page.
pub fn view_page<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    let p = palette::current();

    let card = container(
        column![
            text("KeyGate").size(26).color(p.primary),
            content,
        ]
        .spacing(20),
    )
    .padding(24)
    .max_width(CARD_WIDTH)
    .style(widgets::card_style);

    container(card)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(widgets::page_style)
        .into()
}
