use serde::{Deserialize, Serialize};

/// Stored login credentials for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub password: String,
    pub name: String,
}

/// Player on a team roster
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Player {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "posicao")]
    pub position: String,
    pub email: String,
    #[serde(rename = "idade")]
    pub age: u32,
}

impl Player {
    pub fn new(name: &str, position: &str, email: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            position: position.to_string(),
            email: email.to_string(),
            age,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Team {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "jogadoras")]
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            players: Vec::new(),
        }
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }
}

/// Championship as held in the store (its id is the map key)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Championship {
    pub name: String,
    pub location: String,
    pub date: String,
    pub teams: Vec<Team>,
}

impl Championship {
    pub fn new(name: &str, location: &str, date: &str) -> Self {
        Self {
            name: name.to_string(),
            location: location.to_string(),
            date: date.to_string(),
            teams: Vec::new(),
        }
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.teams.push(team);
        self
    }

    pub fn to_entry(&self, id: &str) -> ChampionshipEntry {
        ChampionshipEntry {
            id: id.to_string(),
            name: self.name.clone(),
            location: self.location.clone(),
            date: self.date.clone(),
            teams: self.teams.clone(),
        }
    }
}

/// Championship as listed by the API
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChampionshipEntry {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "local")]
    pub location: String,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "times")]
    pub teams: Vec<Team>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChampionshipsResponse {
    #[serde(rename = "campeonatos")]
    pub championships: Vec<ChampionshipEntry>,
}

// Request bodies

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "nome")]
    pub name: String,
}

// Response bodies

/// Public view of a user, never includes the password
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub email: String,
    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserSummary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
