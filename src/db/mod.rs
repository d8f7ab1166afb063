//! In-memory store backing every endpoint.
//!
//! Built once at startup, then shared behind an `Arc` as router state.
//! Championships are fixed once the store is shared; credentials grow
//! through registration.

use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap, hash_map::Entry};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{Championship, ChampionshipEntry, Credential, UserSummary};

mod seed;

pub type AppState = Arc<Store>;

#[derive(Debug, Default)]
pub struct Store {
    users: RwLock<HashMap<String, Credential>>,
    championships: BTreeMap<String, Championship>,
}

impl Store {
    /// Empty store, no users and no championships
    pub fn new() -> Self {
        Self::default()
    }

    /// Store loaded with the fixture user and championship
    pub fn seeded() -> Self {
        seed::fixtures()
    }

    pub fn with_user(mut self, email: &str, password: &str, name: &str) -> Self {
        self.users.get_mut().insert(
            email.to_string(),
            Credential {
                password: password.to_string(),
                name: name.to_string(),
            },
        );
        self
    }

    pub fn with_championship(mut self, id: &str, championship: Championship) -> Self {
        self.championships.insert(id.to_string(), championship);
        self
    }

    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }
}

// Credential queries

pub fn login(store: &Store, email: &str, password: &str) -> Result<UserSummary, ApiError> {
    let users = store.users.read();
    match users.get(email) {
        Some(credential) if credential.password == password => Ok(UserSummary {
            email: email.to_string(),
            name: credential.name.clone(),
        }),
        _ => Err(ApiError::Unauthorized),
    }
}

/// Check and insert happen under one write lock, so the first writer wins
pub fn register(store: &Store, email: &str, password: &str, name: &str) -> Result<(), ApiError> {
    let mut users = store.users.write();
    match users.entry(email.to_string()) {
        Entry::Occupied(_) => Err(ApiError::Conflict),
        Entry::Vacant(slot) => {
            slot.insert(Credential {
                password: password.to_string(),
                name: name.to_string(),
            });
            Ok(())
        }
    }
}

pub fn get_user(store: &Store, email: &str) -> Result<UserSummary, ApiError> {
    store
        .users
        .read()
        .get(email)
        .map(|credential| UserSummary {
            email: email.to_string(),
            name: credential.name.clone(),
        })
        .ok_or(ApiError::NotFound)
}

// Championship queries

pub fn list_championships(store: &Store) -> Vec<ChampionshipEntry> {
    store
        .championships
        .iter()
        .map(|(id, championship)| championship.to_entry(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, Team};

    #[test]
    fn register_then_login_returns_display_name() {
        let store = Store::new();
        register(&store, "a@b.com", "pw", "Alice").unwrap();

        let user = login(&store, "a@b.com", "pw").unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn duplicate_registration_keeps_first_record() {
        let store = Store::new();
        register(&store, "a@b.com", "pw", "Alice").unwrap();

        let second = register(&store, "a@b.com", "other", "Mallory");
        assert_eq!(second, Err(ApiError::Conflict));
        assert_eq!(store.user_count(), 1);

        let user = login(&store, "a@b.com", "pw").unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(login(&store, "a@b.com", "other"), Err(ApiError::Unauthorized));
    }

    #[test]
    fn wrong_password_and_unknown_email_are_unauthorized() {
        let store = Store::new().with_user("a@b.com", "pw", "Alice");

        assert_eq!(login(&store, "a@b.com", "wrong"), Err(ApiError::Unauthorized));
        assert_eq!(login(&store, "nobody@b.com", "pw"), Err(ApiError::Unauthorized));
    }

    #[test]
    fn password_match_is_exact() {
        let store = Store::new().with_user("a@b.com", "pw", "Alice");
        assert!(login(&store, "a@b.com", "PW").is_err());
        assert!(login(&store, "a@b.com", "pw ").is_err());
    }

    #[test]
    fn get_user_reports_missing_email() {
        let store = Store::new().with_user("a@b.com", "pw", "Alice");

        assert_eq!(get_user(&store, "x@y.com"), Err(ApiError::NotFound));
        let user = get_user(&store, "a@b.com").unwrap();
        assert_eq!(user.name, "Alice");
    }

    #[test]
    fn lists_single_championship_with_full_roster() {
        let team = Team::new("Time B")
            .with_player(Player::new("Carla", "goleira", "carla@email.com", 30))
            .with_player(Player::new("Dora", "meio-campo", "dora@email.com", 22));
        let store = Store::new().with_championship(
            "c1",
            Championship::new("Copa", "Recife", "01/02/2026").with_team(team.clone()),
        );

        let listed = list_championships(&store);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "c1");
        assert_eq!(listed[0].teams, vec![team]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        assert!(list_championships(&Store::new()).is_empty());
    }

    #[test]
    fn concurrent_registrations_of_same_email_admit_one() {
        let store = Arc::new(Store::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    register(&store, "race@b.com", "pw", &format!("user-{i}")).is_ok()
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(store.user_count(), 1);
    }
}
