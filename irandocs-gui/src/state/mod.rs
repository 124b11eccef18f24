use irandocs_ui::widget::{modal::Modal, Element};

use crate::views::{login_view, sheet_view, with_snackbar};

pub mod message;
pub mod update;
pub mod views;

pub use message::Msg;

/// The transient feedback message currently on screen. The generation ties
/// the message to its dismissal timer so a stale timer cannot dismiss a
/// superseding message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snackbar {
    pub text: &'static str,
    generation: u64,
}

/// Main application state
#[derive(Debug, Default)]
pub struct State {
    pub views: views::ViewsState,
    pub snackbar: Option<Snackbar>,
    snackbar_generation: u64,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the login screen, the sheet overlay when visible, and the
    /// snackbar above everything else.
    pub fn view(&self) -> Element<'_, Msg> {
        let content: Element<'_, Msg> = if self.views.recovery.is_visible() {
            Modal::new(login_view(self), sheet_view(self))
                .on_blur(Some(Msg::SheetClose))
                .anchor_bottom()
                .into()
        } else {
            login_view(self)
        };

        if let Some(snackbar) = &self.snackbar {
            with_snackbar(content, snackbar.text)
        } else {
            content
        }
    }
}

// NOTE: implementation of State::update() is in src/state/update.rs
