use axum::{extract::State, response::Json};

use crate::db::{self, AppState};
use crate::models::ChampionshipsResponse;

// GET /api/campeonatos - Every championship with its teams and players
pub async fn get_championships(State(store): State<AppState>) -> Json<ChampionshipsResponse> {
    Json(ChampionshipsResponse {
        championships: db::list_championships(&store),
    })
}
