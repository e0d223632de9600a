//! Simulated sign-in and the profile of the signed-in student.
//!
//! There is no credential check: signing in only records who is using the
//! application so reviews and greetings can name them.

use crate::{
    store::{JsonStore, USER_KEY},
    types::{now_millis, User},
    ScholarError, ScholarResult,
};

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/notionists/svg?seed=";
const DEFAULT_GRADE: &str = "Student";
const DEFAULT_BIO: &str = "Ready to achieve academic excellence.";

/// Editable profile fields. `None` leaves a field untouched; an empty string
/// clears an optional field.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub grade: Option<String>,
    pub goal: Option<String>,
    pub bio: Option<String>,
}

#[must_use]
pub fn avatar_url(name: &str) -> String {
    format!("{AVATAR_BASE_URL}{}", urlencoding::encode(name))
}

pub struct Session {
    store: JsonStore,
}

impl Session {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub fn current(&self) -> ScholarResult<Option<User>> {
        self.store.load(USER_KEY)
    }

    /// The signed-in user, or [`ScholarError::NotLoggedIn`].
    pub fn require(&self) -> ScholarResult<User> {
        self.current()?.ok_or(ScholarError::NotLoggedIn)
    }

    pub fn login(&self, name: &str, email: &str) -> ScholarResult<User> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(ScholarError::InvalidInput(
                "both name and email are required".to_string(),
            ));
        }
        if !email.contains('@') {
            return Err(ScholarError::InvalidInput(format!(
                "'{email}' is not an email address"
            )));
        }

        let user = User {
            id: now_millis().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: avatar_url(name),
            bio: Some(DEFAULT_BIO.to_string()),
            grade: Some(DEFAULT_GRADE.to_string()),
            goal: None,
        };
        self.store.save(USER_KEY, &user)?;

        tracing::info!(user_id = %user.id, "signed in");
        Ok(user)
    }

    pub fn logout(&self) -> ScholarResult<()> {
        self.store.remove(USER_KEY)?;
        tracing::info!("signed out");
        Ok(())
    }

    /// Apply profile edits. The email address cannot be changed.
    pub fn update_profile(&self, update: ProfileUpdate) -> ScholarResult<User> {
        let mut user = self.require()?;

        if let Some(name) = update.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ScholarError::InvalidInput("name cannot be empty".to_string()));
            }
            user.name = name.to_string();
        }
        if let Some(grade) = update.grade {
            user.grade = non_empty(grade);
        }
        if let Some(goal) = update.goal {
            user.goal = non_empty(goal);
        }
        if let Some(bio) = update.bio {
            user.bio = non_empty(bio);
        }

        self.store.save(USER_KEY, &user)?;
        Ok(user)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_url_encodes_the_name() {
        assert_eq!(
            avatar_url("Ada Lovelace"),
            "https://api.dicebear.com/7.x/notionists/svg?seed=Ada%20Lovelace"
        );
    }
}
