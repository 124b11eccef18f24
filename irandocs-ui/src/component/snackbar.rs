use crate::{component::text, theme, widget::*};

/// A single transient message card. The caller owns its placement and
/// lifetime; a new message simply replaces this one.
pub fn snackbar<'a, T: 'a>(message: &'a str) -> Container<'a, T> {
    Container::new(text::p2_medium(message))
        .padding([12.0, 18.0])
        .style(theme::snackbar::info)
}
