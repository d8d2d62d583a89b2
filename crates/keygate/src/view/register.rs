//! Register tab.

use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Length};
use keygate_core::PasswordValidationResult;

use crate::message::{Message, RegisterMessage};
use crate::model::RegistrationForm;
use crate::style::widgets;
use crate::style::widgets::palette;

use super::fields::{labeled_input, labeled_password, status_line};

/// Render the registration form with live password indicators.
pub fn view_register(form: &RegistrationForm, ready: bool) -> Element<'_, Message> {
    let p = palette::current();

    let submit = Message::Register(RegisterMessage::Submit);
    let can_submit = ready && form.is_complete();

    let mut content = column![
        text("Create an account").size(20).color(p.text_primary),
        labeled_input(
            "Username",
            &form.username,
            |s| Message::Register(RegisterMessage::UsernameChanged(s)),
            submit.clone(),
        ),
        labeled_password(
            "Password",
            &form.password,
            |s| Message::Register(RegisterMessage::PasswordChanged(s)),
            submit.clone(),
        ),
        labeled_password(
            "Confirm Password",
            &form.confirm_password,
            |s| Message::Register(RegisterMessage::ConfirmPasswordChanged(s)),
            submit.clone(),
        ),
        view_requirements(form.validation),
    ]
    .spacing(16);

    if let Some(message) = form.status.message() {
        content = content.push(status_line(message, form.status.is_success()));
    }

    content
        .push(
            button(text("Register").size(14))
                .on_press_maybe(can_submit.then_some(submit))
                .padding([10, 20])
                .width(Length::Fill)
                .style(widgets::primary_button_style),
        )
        .into()
}

/// One row per strength rule, checked or crossed.
fn view_requirements(validation: PasswordValidationResult) -> Element<'static, Message> {
    let p = palette::current();

    let rows = validation
        .rules()
        .map(|(rule, met)| -> Element<'static, Message> {
            let (glyph, color) = if met {
                ("\u{2713}", p.accent_green)
            } else {
                ("\u{2717}", p.accent_red)
            };
            row![
                text(glyph).size(13).color(color),
                text(rule.label()).size(13).color(color),
            ]
            .spacing(8)
            .align_y(Alignment::Center)
            .into()
        });

    column![text("Password Requirements:").size(12).color(p.text_secondary)]
        .extend(rows)
        .spacing(4)
        .into()
}
