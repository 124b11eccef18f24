use iced::border::Radius;
use iced::widget::container::Style;
use iced::{Background, Border};

use super::palette::ContainerPalette;
use super::Theme;

fn card(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: if let Some(color) = palette.border {
            Border {
                radius: 12.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                radius: 12.0.into(),
                ..Default::default()
            }
        },
        ..Default::default()
    }
}

pub fn simple(theme: &Theme) -> Style {
    card(&theme.colors.cards.simple)
}

// Bottom sheet surface, rounded on the top corners only.
pub fn sheet(theme: &Theme) -> Style {
    let mut style = card(&theme.colors.cards.sheet);
    style.border.radius = Radius {
        top_left: 36.0,
        top_right: 36.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };
    style
}
