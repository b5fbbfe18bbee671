use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::models::{CountResponse, RegisterPlayerRequest, ReportMatchRequest};
use crate::database::models::PlayerId;
use crate::services::tournament::TournamentService;

pub struct AppState {
    pub tournament: TournamentService,
}

pub async fn count_players(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let count = state.tournament.count_players()?;
    Ok(Json(CountResponse { count }))
}

pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterPlayerRequest>,
) -> ApiResult<impl IntoResponse> {
    let player = state.tournament.register_player(&request.name)?;
    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<PlayerId>,
) -> ApiResult<impl IntoResponse> {
    let response = match state.tournament.find_player(player_id)? {
        Some(player) => Json(player).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };
    Ok(response)
}

pub async fn delete_players(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    state.tournament.delete_players()?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_standings(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let standings = state.tournament.player_standings()?;
    Ok(Json(standings))
}

pub async fn list_matches(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let matches = state.tournament.list_matches()?;
    Ok(Json(matches))
}

pub async fn report_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReportMatchRequest>,
) -> ApiResult<impl IntoResponse> {
    let recorded = state.tournament.report_match(request.winner, request.loser)?;
    Ok((StatusCode::CREATED, Json(recorded)))
}

pub async fn delete_matches(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    state.tournament.delete_matches()?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_pairings(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let pairings = state.tournament.swiss_pairings()?;
    Ok(Json(pairings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::create_router;
    use crate::database::models::{Match, Player, Standing};
    use crate::pairing::Pairings;
    use axum::body::Body;
    use axum::http::Request;
    use axum::Router;
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    fn app() -> Router {
        let tournament = TournamentService::in_memory().unwrap();
        create_router(Arc::new(AppState { tournament }))
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn read_json<T: DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn register(app: &Router, name: &str) -> Player {
        let body = format!(r#"{{"name": "{name}"}}"#);
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/players", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        read_json(response).await
    }

    #[tokio::test]
    async fn test_register_and_count() {
        let app = app();
        let alice = register(&app, "Alice").await;
        assert_eq!((alice.wins, alice.matches), (0, 0));

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/players/count"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let count: CountResponse = read_json(response).await;
        assert_eq!(count.count, 1);

        let response = app
            .clone()
            .oneshot(empty_request("GET", &format!("/api/players/{}", alice.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_player_is_not_found() {
        let response = app()
            .oneshot(empty_request("GET", "/api/players/99"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_report_match_and_standings() {
        let app = app();
        let alice = register(&app, "Alice").await;
        let bob = register(&app, "Bob").await;

        let body = format!(r#"{{"winner": {}, "loser": {}}}"#, alice.id, bob.id);
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/matches", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let recorded: Match = read_json(response).await;
        assert_eq!(recorded.winner, alice.id);

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/standings"))
            .await
            .unwrap();
        let standings: Vec<Standing> = read_json(response).await;
        let names: Vec<_> = standings.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
    }

    #[tokio::test]
    async fn test_report_match_error_statuses() {
        let app = app();
        let alice = register(&app, "Alice").await;

        let body = format!(r#"{{"winner": {}, "loser": {}}}"#, alice.id, alice.id + 5);
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/matches", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = format!(r#"{{"winner": {0}, "loser": {0}}}"#, alice.id);
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/matches", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_pairings_and_deletes() {
        let app = app();
        for name in ["A", "B", "C"] {
            register(&app, name).await;
        }

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/pairings"))
            .await
            .unwrap();
        let pairings: Pairings = read_json(response).await;
        assert_eq!(pairings.len(), 1);
        assert_eq!(pairings.unpaired.map(|s| s.name), Some("C".to_string()));

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", "/api/matches"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", "/api/players"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/players/count"))
            .await
            .unwrap();
        let count: CountResponse = read_json(response).await;
        assert_eq!(count.count, 0);
    }
}
