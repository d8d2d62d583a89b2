//! Login/Register tab strip.

use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::{Message, Tab};
use crate::style::widgets;

/// Render the tab strip with `current` highlighted.
pub fn view_tabs(current: Tab) -> Element<'static, Message> {
    container(
        row![
            tab_button("\u{2192}", "Login", Tab::Login, current),
            tab_button("\u{271A}", "Register", Tab::Register, current),
        ]
        .spacing(4),
    )
    .padding(4)
    .width(Length::Fill)
    .style(widgets::tab_bar_style)
    .into()
}

fn tab_button(
    icon: &'static str,
    label: &'static str,
    tab: Tab,
    current: Tab,
) -> Element<'static, Message> {
    let style = if tab == current {
        widgets::tab_button_selected_style
    } else {
        widgets::tab_button_style
    };

    button(
        row![text(icon).size(14), text(label).size(14)]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .on_press(Message::SelectTab(tab))
    .padding([8, 16])
    .width(Length::Fill)
    .style(style)
    .into()
}
