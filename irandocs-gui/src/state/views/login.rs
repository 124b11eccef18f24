use irandocs_ui::component::form;

use crate::phone;

/// The mobile field never holds more than 11 characters.
pub const MOBILE_MAX_CHARS: usize = 11;
pub const PASSWORD_MIN_CHARS: usize = 5;

/// Outcome of a login attempt. Exactly one per submit, checks are
/// short-circuited in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFeedback {
    InvalidMobile,
    InvalidPassword,
    Welcome,
}

impl LoginFeedback {
    pub fn text(self) -> &'static str {
        match self {
            Self::InvalidMobile => "Mobile is not Valid",
            Self::InvalidPassword => "Password is incorrect",
            Self::Welcome => "Welcome :)",
        }
    }
}

/// Login view state
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub mobile: form::Value<String>,
    pub password: form::Value<String>,
    pub password_visible: bool,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    /// An edit that would exceed the cap is dropped wholesale, the field
    /// keeps its previous value.
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

    pub fn on_update_password(&mut self, password: String) {
        self.password = form::Value {
            value: password,
            warning: None,
            valid: true,
        };
    }

    /// Flips masked/plain rendering of the password field. The stored value
    /// is untouched.
    pub fn on_toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Validates the form and returns the single feedback for this attempt.
    /// The offending field, if any, is marked invalid.
    pub fn on_submit(&mut self) -> LoginFeedback {
        if !phone::is_valid_phone(&self.mobile.value) {
            self.mobile.valid = false;
            self.mobile.warning = Some(LoginFeedback::InvalidMobile.text());
            return LoginFeedback::InvalidMobile;
        }
        self.mobile.valid = true;
        self.mobile.warning = None;

        if self.password.value.chars().count() < PASSWORD_MIN_CHARS {
            self.password.valid = false;
            self.password.warning = Some(LoginFeedback::InvalidPassword.text());
            return LoginFeedback::InvalidPassword;
        }
        self.password.valid = true;
        self.password.warning = None;

        // No backend: a well-formed submission is simply acknowledged.
        LoginFeedback::Welcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(mobile: &str, password: &str) -> LoginState {
        let mut state = LoginState::new();
        state.on_update_mobile(mobile.to_string());
        state.on_update_password(password.to_string());
        state
    }

    #[test]
    fn submit_checks_mobile_first() {
        let mut state = state("123", "abcdef");
        assert_eq!(state.on_submit(), LoginFeedback::InvalidMobile);
        assert!(!state.mobile.valid);
        // the password is not inspected once the mobile check fails
        assert!(state.password.valid);
    }

    #[test]
    fn submit_rejects_short_password() {
        let mut state = state("09123456789", "abcd");
        assert_eq!(state.on_submit(), LoginFeedback::InvalidPassword);
        assert!(state.mobile.valid);
        assert!(!state.password.valid);
    }

    #[test]
    fn submit_welcomes_valid_credentials() {
        let mut state = state("09123456789", "abcdef");
        assert_eq!(state.on_submit(), LoginFeedback::Welcome);
        assert!(state.mobile.valid);
        assert!(state.password.valid);
    }

    #[test]
    fn password_of_exactly_five_chars_passes() {
        let mut state = state("09123456789", "abcde");
        assert_eq!(state.on_submit(), LoginFeedback::Welcome);
    }

    #[test]
    fn empty_mobile_is_rejected() {
        let mut state = state("", "abcdef");
        assert_eq!(state.on_submit(), LoginFeedback::InvalidMobile);
    }

    #[test]
    fn mobile_edits_are_capped_at_eleven_chars() {
        let mut state = LoginState::new();
        state.on_update_mobile("09123456789".to_string());
        assert_eq!(state.mobile.value, "09123456789");

        // a keystroke pushing past the cap is dropped wholesale
        state.on_update_mobile("091234567890".to_string());
        assert_eq!(state.mobile.value, "09123456789");
    }

    #[test]
    fn multibyte_edits_are_counted_in_chars() {
        let mut state = LoginState::new();
        state.on_update_mobile("۰۹۱۲۳۴۵۶۷۸۹".to_string());
        assert_eq!(state.mobile.value.chars().count(), 11);
        state.on_update_mobile("۰۹۱۲۳۴۵۶۷۸۹۰".to_string());
        assert_eq!(state.mobile.value.chars().count(), 11);
    }

    #[test]
    fn resubmit_clears_a_previous_field_warning() {
        let mut state = state("123", "abcdef");
        assert_eq!(state.on_submit(), LoginFeedback::InvalidMobile);
        state.on_update_mobile("09123456789".to_string());
        assert_eq!(state.on_submit(), LoginFeedback::Welcome);
        assert!(state.mobile.valid);
        assert_eq!(state.mobile.warning, None);
    }

    #[test]
    fn visibility_toggle_keeps_the_password() {
        let mut state = state("09123456789", "secret");
        assert!(!state.password_visible);
        state.on_toggle_password_visibility();
        assert!(state.password_visible);
        assert_eq!(state.password.value, "secret");
        state.on_toggle_password_visibility();
        assert!(!state.password_visible);
        assert_eq!(state.password.value, "secret");
    }
}
