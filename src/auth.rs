use serde::{Deserialize, Serialize};

/// The signed-in user as the server reported it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Session {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|held| held == role)
    }
}

/// Client-side auth state with an explicit lifecycle: established on
/// sign-in, cleared on sign-out. Passed to the views that need it instead
/// of living in an ambient singleton.
#[derive(Clone, Debug, Default)]
pub struct AuthContext {
    session: Option<Session>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self { session: None }
    }

    pub fn establish(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn clear(&mut self) {
        self.session = None;
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.session.as_ref().map(|session| session.user_id)
    }
}
