use crate::models::UserType;

#[derive(Debug, Clone, PartialEq)]
struct Identity {
    user_id: i64,
    username: String,
    user_type: UserType,
}

/// Who is signed in. The application owns one of these and hands it to the
/// data-access calls that are scoped to the current user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn sign_in(&mut self, user_id: i64, username: &str, user_type: UserType) {
        self.identity = Some(Identity {
            user_id,
            username: username.to_string(),
            user_type,
        });
    }

    pub fn clear(&mut self) {
        self.identity = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.identity.as_ref().map(|i| i.user_id)
    }

    pub fn username(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.username.as_str())
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.identity.as_ref().map(|i| i.user_type)
    }

    pub fn is_admin(&self) -> bool {
        self.user_type() == Some(UserType::Admin)
    }
}
