/// Identity of the local user, handed explicitly to every screen that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub current_user_id: String,
}

impl SessionContext {
    pub const DEFAULT_USER_ID: &'static str = "user_123";

    pub fn new(current_user_id: impl Into<String>) -> Self {
        Self { current_user_id: current_user_id.into() }
    }

    pub fn is_own(&self, sender_id: &str) -> bool {
        sender_id == self.current_user_id
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(Self::DEFAULT_USER_ID)
    }
}
