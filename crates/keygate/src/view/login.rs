//! Login tab.

use iced::widget::{button, column, text};
use iced::{Element, Length};

use crate::message::{LoginMessage, Message};
use crate::model::LoginForm;
use crate::style::widgets;
use crate::style::widgets::palette;

use super::fields::{labeled_input, labeled_password, status_line};

/// Render the login form.
///
/// The submit button stays disabled until both fields have a value and the
/// account store is open.
pub fn view_login(form: &LoginForm, ready: bool) -> Element<'_, Message> {
    let p = palette::current();

    let submit = Message::Login(LoginMessage::Submit);
    let can_submit = ready && form.is_complete();

    let mut content = column![
        text("Sign in").size(20).color(p.text_primary),
        labeled_input(
            "Username",
            &form.username,
            |s| Message::Login(LoginMessage::UsernameChanged(s)),
            submit.clone(),
        ),
        labeled_password(
            "Password",
            &form.password,
            |s| Message::Login(LoginMessage::PasswordChanged(s)),
            submit.clone(),
        ),
    ]
    .spacing(16);

    if let Some(error) = &form.error {
        content = content.push(status_line(error, false));
    }

    content
        .push(
            button(text("Login").size(14))
                .on_press_maybe(can_submit.then_some(submit))
                .padding([10, 20])
                .width(Length::Fill)
                .style(widgets::primary_button_style),
        )
        .into()
}
