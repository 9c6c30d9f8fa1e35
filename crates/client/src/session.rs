use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role granted by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Athlete,
    Federation,
    Admin,
}

impl Role {
    /// Federation and admin users may create, update and delete events.
    pub fn can_manage_events(&self) -> bool {
        matches!(self, Role::Federation | Role::Admin)
    }
}

/// Who is driving the current view session.
///
/// Passed explicitly into every command handler instead of living in
/// page-global state.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
    pub role: Role,
}

impl Session {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn management_roles() {
        assert!(Role::Federation.can_manage_events());
        assert!(Role::Admin.can_manage_events());
        assert!(!Role::Athlete.can_manage_events());
    }

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Athlete).unwrap(), "\"athlete\"");
        assert_eq!(
            serde_json::to_string(&Role::Federation).unwrap(),
            "\"federation\""
        );
    }
}
