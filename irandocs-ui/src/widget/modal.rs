use iced::alignment;
use iced::widget::{mouse_area, opaque};
use iced::Length;

use super::{Container, Element, Stack};
use crate::theme;

/// A widget overlaying a modal surface on top of a base element, with a
/// dimmed backdrop. The surface is centered by default; a bottom sheet is
/// anchored to the bottom edge instead.
pub struct Modal<'a, Message> {
    base: Element<'a, Message>,
    modal: Element<'a, Message>,
    on_blur: Option<Message>,
    anchor_bottom: bool,
}

impl<'a, Message> Modal<'a, Message>
where
    Message: Clone + 'a,
{
    /// Returns a new [`Modal`]
    pub fn new(
        base: impl Into<Element<'a, Message>>,
        modal: impl Into<Element<'a, Message>>,
    ) -> Self {
        Self {
            base: base.into(),
            modal: modal.into(),
            on_blur: None,
            anchor_bottom: false,
        }
    }

    /// Sets the message that will be produced when the backdrop of the
    /// [`Modal`] is pressed
    pub fn on_blur(self, on_blur: Option<Message>) -> Self {
        Self { on_blur, ..self }
    }

    /// Anchors the modal surface to the bottom edge (bottom sheet)
    pub fn anchor_bottom(self) -> Self {
        Self {
            anchor_bottom: true,
            ..self
        }
    }
}

impl<'a, Message> From<Modal<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'a,
{
    fn from(modal: Modal<'a, Message>) -> Self {
        // The surface itself is opaque so presses on it never reach the
        // backdrop's mouse area.
        let mut backdrop = Container::new(opaque(modal.modal))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .style(theme::overlay::backdrop);
        backdrop = if modal.anchor_bottom {
            backdrop.align_y(alignment::Vertical::Bottom)
        } else {
            backdrop.align_y(alignment::Vertical::Center)
        };

        let overlay: Element<'a, Message> = if let Some(on_blur) = modal.on_blur {
            mouse_area(backdrop).on_press(on_blur).into()
        } else {
            backdrop.into()
        };

        Stack::with_children(vec![modal.base, opaque(overlay)]).into()
    }
}
