use irandocs_ui::component::form;

use super::login::MOBILE_MAX_CHARS;
use crate::phone;

/// Visibility state machine of the forgot-password sheet. There are no
/// intermediate states and never more than one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sheet {
    #[default]
    Hidden,
    Visible,
}

/// Outcome of a code request. Exactly one per submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryFeedback {
    InvalidMobile,
    CodeSent,
}

impl RecoveryFeedback {
    pub fn text(self) -> &'static str {
        match self {
            Self::InvalidMobile => "Mobile is not Valid",
            Self::CodeSent => "code will be sent soon :)",
        }
    }
}

/// Forgot-password view state
#[derive(Debug, Clone, Default)]
pub struct RecoveryState {
    pub mobile: form::Value<String>,
    pub sheet: Sheet,
}

impl RecoveryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.sheet == Sheet::Visible
    }

    /// Hidden -> Visible, only on an explicit open request while hidden.
    pub fn on_open(&mut self) {
        if self.sheet == Sheet::Hidden {
            self.sheet = Sheet::Visible;
        }
    }

    /// Visible -> Hidden. The sheet's input does not survive dismissal.
    pub fn on_close(&mut self) {
        self.sheet = Sheet::Hidden;
        self.mobile = form::Value::default();
    }

    pub fn on_update_mobile(&mut self, mobile: String) {
        if mobile.chars().count() > MOBILE_MAX_CHARS {
            return;
        }
        self.mobile = form::Value {
            value: mobile,
            warning: None,
            valid: true,
        };
    }

    /// Validates the number. A successful request closes the sheet, a
    /// rejected one leaves it open for another attempt.
    pub fn on_submit(&mut self) -> RecoveryFeedback {
        if !phone::is_valid_phone(&self.mobile.value) {
            self.mobile.valid = false;
            self.mobile.warning = Some(RecoveryFeedback::InvalidMobile.text());
            return RecoveryFeedback::InvalidMobile;
        }
        self.on_close();
        RecoveryFeedback::CodeSent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_only_from_hidden() {
        let mut state = RecoveryState::new();
        assert_eq!(state.sheet, Sheet::Hidden);
        state.on_open();
        assert_eq!(state.sheet, Sheet::Visible);
        // a second request is a no-op
        state.on_open();
        assert_eq!(state.sheet, Sheet::Visible);
    }

    #[test]
    fn close_resets_the_input() {
        let mut state = RecoveryState::new();
        state.on_open();
        state.on_update_mobile("0912".to_string());
        state.on_close();
        assert_eq!(state.sheet, Sheet::Hidden);
        assert_eq!(state.mobile.value, "");
    }

    #[test]
    fn invalid_submit_keeps_the_sheet_open() {
        let mut state = RecoveryState::new();
        state.on_open();
        state.on_update_mobile("123".to_string());
        assert_eq!(state.on_submit(), RecoveryFeedback::InvalidMobile);
        assert_eq!(state.sheet, Sheet::Visible);
        assert!(!state.mobile.valid);
    }

    #[test]
    fn valid_submit_closes_the_sheet() {
        let mut state = RecoveryState::new();
        state.on_open();
        state.on_update_mobile("09123456789".to_string());
        assert_eq!(state.on_submit(), RecoveryFeedback::CodeSent);
        assert_eq!(state.sheet, Sheet::Hidden);
        assert_eq!(state.mobile.value, "");
    }

    #[test]
    fn mobile_edits_are_capped_at_eleven_chars() {
        let mut state = RecoveryState::new();
        state.on_update_mobile("09123456789".to_string());
        state.on_update_mobile("09123456789123".to_string());
        assert_eq!(state.mobile.value, "09123456789");
    }
}
