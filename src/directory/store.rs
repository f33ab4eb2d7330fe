//! The in-memory user directory.

use crate::{
    Error,
    directory::{User, UserId},
};

/// The users fetched from the remote endpoint, in fetch order.
///
/// The directory is populated once per session and mutated only by local
/// deletion; nothing is ever written back to the source. Users have a stable
/// identifier, so deletion always matches by `id` and never by position,
/// which would misidentify rows after an earlier deletion shifted indices.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Create a directory from a fetched user collection.
    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Remove the user with the given `id` for the rest of the session.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::NotFound] if no user has the
    /// given `id`.
    pub fn delete(&mut self, id: UserId) -> Result<(), Error> {
        let position = self
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or(Error::NotFound)?;
        self.users.remove(position);

        Ok(())
    }

    /// Look up a user by `id`.
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// The current users, in fetch order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The number of users in the directory.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory has no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
