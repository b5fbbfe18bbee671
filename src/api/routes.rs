use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    count_players, delete_matches, delete_players, get_pairings, get_player, get_standings,
    list_matches, register_player, report_match, AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/players", post(register_player).delete(delete_players))
        .route("/api/players/count", get(count_players))
        .route("/api/players/:id", get(get_player))
        .route("/api/standings", get(get_standings))
        .route("/api/matches", get(list_matches).post(report_match).delete(delete_matches))
        .route("/api/pairings", get(get_pairings))
        .with_state(state)
}
