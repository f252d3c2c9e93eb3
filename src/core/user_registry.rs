//! User registry module
//!
//! This module provides the `UserRegistry` struct which owns every user known
//! to the ledger.
//!
//! The UserRegistry is responsible for:
//! - Registering users lazily on first account creation
//! - Resolving usernames by linear scan in registration order
//! - Handing out the per-user account capacity from the ledger configuration

use crate::types::User;

/// Owns all users in registration order
pub struct UserRegistry {
    /// Users in the order they were first referenced
    users: Vec<User>,

    /// Capacity given to each newly registered user
    max_accounts_per_user: usize,
}

impl UserRegistry {
    /// Create an empty registry
    ///
    /// # Arguments
    ///
    /// * `max_accounts_per_user` - Account capacity for users registered later
    pub fn new(max_accounts_per_user: usize) -> Self {
        UserRegistry {
            users: Vec::new(),
            max_accounts_per_user,
        }
    }

    /// Get or create the user with the given username
    ///
    /// If the user is already registered, returns a mutable reference to it.
    /// Otherwise registers a new user with the configured capacity and
    /// returns that one. Repeated calls with the same username always resolve
    /// to the same user.
    pub fn find_or_create(&mut self, username: &str) -> &mut User {
        if let Some(index) = self.position(username) {
            return &mut self.users[index];
        }

        tracing::debug!(username, "registering new user");
        let index = self.users.len();
        self.users
            .push(User::new(username, self.max_accounts_per_user));
        &mut self.users[index]
    }

    /// Look up a user without creating it
    pub fn find(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username() == username)
    }

    pub fn find_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users
            .iter_mut()
            .find(|user| user.username() == username)
    }

    fn position(&self, username: &str) -> Option<usize> {
        self.users
            .iter()
            .position(|user| user.username() == username)
    }

    /// All users in registration order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
