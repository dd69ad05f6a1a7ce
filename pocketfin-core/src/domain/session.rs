//! Session domain model

use serde::{Deserialize, Serialize};

use crate::domain::User;

/// The authenticated identity, a projection of [`User`] without the hash
///
/// At most one session exists per storage context; the session manager
/// enforces that on every write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}
