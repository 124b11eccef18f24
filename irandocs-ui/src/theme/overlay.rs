use iced::widget::container::Style;
use iced::Background;

use super::Theme;

// Scrim drawn between the base view and a modal surface.
pub fn backdrop(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.general.backdrop)),
        ..Default::default()
    }
}
