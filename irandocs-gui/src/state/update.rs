use std::time::Duration;

use iced::Task;
use tracing::debug;

use super::{Msg, Snackbar, State};
use crate::state::views::RecoveryFeedback;

/// How long each feedback surface stays on screen.
const SNACKBAR_DURATION: Duration = Duration::from_secs(3);
const TOAST_SHORT: Duration = Duration::from_secs(2);
const TOAST_LONG: Duration = Duration::from_millis(3500);

// Update routing logic
impl State {
    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        debug!(?message, "received message");
        match message {
            // Login form
            Msg::LoginUpdateMobile(mobile) => self.views.login.on_update_mobile(mobile),
            Msg::LoginUpdatePassword(password) => self.views.login.on_update_password(password),
            Msg::LoginTogglePasswordVisibility => {
                self.views.login.on_toggle_password_visibility()
            }
            Msg::LoginSubmit => return self.on_login_submit(),

            // Forgot-password sheet
            Msg::SheetOpen => self.views.recovery.on_open(),
            Msg::SheetClose => self.on_sheet_close(),
            Msg::SheetUpdateMobile(mobile) => self.views.recovery.on_update_mobile(mobile),
            Msg::SheetSendCode => return self.on_sheet_send_code(),

            // Transient feedback
            Msg::SnackbarExpired(generation) => self.on_snackbar_expired(generation),
        }
        Task::none()
    }

    fn on_login_submit(&mut self) -> Task<Msg> {
        let feedback = self.views.login.on_submit();
        self.show_snackbar(feedback.text(), SNACKBAR_DURATION)
    }

    // Back signal or backdrop press. Ignored while the sheet is hidden.
    fn on_sheet_close(&mut self) {
        if self.views.recovery.is_visible() {
            self.views.recovery.on_close();
        }
    }

    fn on_sheet_send_code(&mut self) -> Task<Msg> {
        let feedback = self.views.recovery.on_submit();
        let duration = match feedback {
            RecoveryFeedback::InvalidMobile => TOAST_SHORT,
            RecoveryFeedback::CodeSent => TOAST_LONG,
        };
        self.show_snackbar(feedback.text(), duration)
    }

    fn on_snackbar_expired(&mut self, generation: u64) {
        // A newer message may have superseded the one this timer belongs to.
        if self
            .snackbar
            .as_ref()
            .is_some_and(|snackbar| snackbar.generation == generation)
        {
            self.snackbar = None;
        }
    }

    /// Replaces any visible message and schedules the dismissal of the new
    /// one. The returned task is fire-and-forget.
    fn show_snackbar(&mut self, text: &'static str, duration: Duration) -> Task<Msg> {
        self.snackbar_generation += 1;
        let generation = self.snackbar_generation;
        self.snackbar = Some(Snackbar { text, generation });
        Task::perform(tokio::time::sleep(duration), move |_| {
            Msg::SnackbarExpired(generation)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::views::Sheet;

    fn submit_login(state: &mut State, mobile: &str, password: &str) {
        let _ = state.update(Msg::LoginUpdateMobile(mobile.to_string()));
        let _ = state.update(Msg::LoginUpdatePassword(password.to_string()));
        let _ = state.update(Msg::LoginSubmit);
    }

    fn snackbar_text(state: &State) -> Option<&'static str> {
        state.snackbar.map(|snackbar| snackbar.text)
    }

    #[tokio::test]
    async fn login_submit_produces_one_message() {
        let mut state = State::new();
        submit_login(&mut state, "123", "abcdef");
        assert_eq!(snackbar_text(&state), Some("Mobile is not Valid"));

        submit_login(&mut state, "09123456789", "abcd");
        assert_eq!(snackbar_text(&state), Some("Password is incorrect"));

        submit_login(&mut state, "09123456789", "abcdef");
        assert_eq!(snackbar_text(&state), Some("Welcome :)"));
    }

    #[tokio::test]
    async fn sheet_send_code_closes_on_success() {
        let mut state = State::new();
        let _ = state.update(Msg::SheetOpen);
        let _ = state.update(Msg::SheetUpdateMobile("09123456789".to_string()));
        let _ = state.update(Msg::SheetSendCode);
        assert_eq!(snackbar_text(&state), Some("code will be sent soon :)"));
        assert_eq!(state.views.recovery.sheet, Sheet::Hidden);
    }

    #[tokio::test]
    async fn sheet_stays_open_on_invalid_number() {
        let mut state = State::new();
        let _ = state.update(Msg::SheetOpen);
        let _ = state.update(Msg::SheetUpdateMobile("123".to_string()));
        let _ = state.update(Msg::SheetSendCode);
        assert_eq!(snackbar_text(&state), Some("Mobile is not Valid"));
        assert_eq!(state.views.recovery.sheet, Sheet::Visible);
    }

    #[test]
    fn sheet_close_is_a_noop_while_hidden() {
        let mut state = State::new();
        let _ = state.update(Msg::SheetClose);
        assert_eq!(state.views.recovery.sheet, Sheet::Hidden);
    }

    #[tokio::test]
    async fn a_new_message_supersedes_the_previous_one() {
        let mut state = State::new();
        submit_login(&mut state, "123", "abcdef");
        let first_generation = state.snackbar.map(|s| s.generation);

        submit_login(&mut state, "09123456789", "abcdef");
        assert_eq!(snackbar_text(&state), Some("Welcome :)"));

        // the stale timer of the first message must not clear the second
        let _ = state.update(Msg::SnackbarExpired(first_generation.unwrap()));
        assert_eq!(snackbar_text(&state), Some("Welcome :)"));
    }

    #[tokio::test]
    async fn the_current_timer_clears_its_own_message() {
        let mut state = State::new();
        submit_login(&mut state, "09123456789", "abcdef");
        let generation = state.snackbar.map(|s| s.generation).unwrap();
        let _ = state.update(Msg::SnackbarExpired(generation));
        assert_eq!(state.snackbar, None);
    }
}
