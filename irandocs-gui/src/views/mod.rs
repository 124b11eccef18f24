mod login;
mod recovery;

pub use login::login_view;
pub use recovery::sheet_view;

use iced::{alignment, Length};
use irandocs_ui::{component::snackbar, widget::*};

use crate::state::Msg;

/// Stacks the transient message above `content`, bottom-centered. The bar
/// only covers its own bounds, the rest of the screen stays interactive.
pub fn with_snackbar<'a>(content: Element<'a, Msg>, text: &'a str) -> Element<'a, Msg> {
    let bar = Container::new(snackbar::snackbar(text))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(24);

    Stack::with_children(vec![content, bar.into()]).into()
}
