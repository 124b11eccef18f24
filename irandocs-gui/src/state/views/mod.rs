pub mod login;
pub mod recovery;

pub use login::{LoginFeedback, LoginState};
pub use recovery::{RecoveryFeedback, RecoveryState, Sheet};

/// Per-view state, owned by the root [`State`](super::State).
#[derive(Debug, Clone, Default)]
pub struct ViewsState {
    pub login: LoginState,
    pub recovery: RecoveryState,
}

impl ViewsState {
    pub fn new() -> Self {
        Self::default()
    }
}
