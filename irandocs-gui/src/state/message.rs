/// All application messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    // Login form
    LoginUpdateMobile(String),
    LoginUpdatePassword(String),
    LoginTogglePasswordVisibility,
    LoginSubmit,

    // Forgot-password sheet
    SheetOpen,
    SheetClose,
    SheetUpdateMobile(String),
    SheetSendCode,

    // Transient feedback
    SnackbarExpired(u64),
}
