//! Container style functions with theme support.

use iced::widget::container;
use iced::{Background, Border};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Full-window page background.
pub fn page_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        ..Default::default()
    }
}

/// Card style - the login/register panel.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::medium(),
        ..Default::default()
    }
}

/// Tab strip style - bottom rule under the tab buttons.
pub fn tab_bar_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::SMALL.into(),
        },
        ..Default::default()
    }
}
