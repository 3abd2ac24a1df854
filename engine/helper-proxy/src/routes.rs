//! REST routes forwarding to the Sleeper API
//!
//! Every route returns the upstream JSON body unchanged. The player catalog
//! goes through the on-disk cache; everything else is fetched per request.
//! Upstream failures become a 500 with an `{"error": ...}` body.

use league_analytics::TrendingKind;
use serde::{Deserialize, Serialize};
use sleeper_provider::client::paths;
use sleeper_provider::config::TrendingConfig;
use sleeper_provider::SleeperClient;
use std::sync::Arc;
use tracing::{error, info};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Trending query parameters; unset values use the configured defaults
#[derive(Debug, Default, Deserialize)]
pub struct TrendingParams {
    pub limit: Option<u32>,
    pub lookback_hours: Option<u32>,
}

fn error_reply(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorResponse { error: message.into() };
    warp::reply::with_status(warp::reply::json(&body), status).into_response()
}

fn json_body(body: String) -> Response {
    warp::reply::with_header(body, "content-type", "application/json").into_response()
}

/// Path segments arrive percent-encoded; the path builders re-encode them
fn decode_segment(raw: String) -> String {
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}

async fn forward(path: String, client: Arc<SleeperClient>) -> Result<Response, Rejection> {
    match client.get_text(&path).await {
        Ok(body) => Ok(json_body(body)),
        Err(e) => {
            error!("Upstream request {} failed: {}", path, e);
            Ok(error_reply(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// Full player catalog, served from the file cache while fresh
pub async fn get_players(client: Arc<SleeperClient>) -> Result<Response, Rejection> {
    match client.players_raw().await {
        Ok(body) => Ok(json_body(body)),
        Err(e) => {
            error!("Failed to load player catalog: {}", e);
            Ok(error_reply(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

pub async fn get_trending(
    kind: String,
    params: TrendingParams,
    client: Arc<SleeperClient>,
    defaults: TrendingConfig,
) -> Result<Response, Rejection> {
    let Some(kind) = TrendingKind::parse(&kind) else {
        return Ok(error_reply(StatusCode::BAD_REQUEST, format!("Unknown trending type: {kind}")));
    };
    let limit = params.limit.unwrap_or(defaults.limit);
    let lookback_hours = params.lookback_hours.unwrap_or(defaults.lookback_hours);

    forward(paths::trending(kind, limit, lookback_hours), client).await
}

/// Create REST API routes
pub fn create_routes(
    client: Arc<SleeperClient>,
    trending: TrendingConfig,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let client_filter = warp::any().map(move || client.clone());
    let trending_filter = warp::any().map(move || trending.clone());

    // Health check endpoint
    let health = warp::path("api")
        .and(warp::path("health"))
        .and(warp::path::end())
        .and(warp::get())
        .map(|| "ok");

    let players = warp::path("api")
        .and(warp::path("players"))
        .and(warp::path::end())
        .and(warp::get())
        .and(client_filter.clone())
        .and_then(get_players);

    let trending_players = warp::path("api")
        .and(warp::path("players"))
        .and(warp::path("trending"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<TrendingParams>())
        .and(client_filter.clone())
        .and(trending_filter)
        .and_then(get_trending);

    let user = warp::path("api")
        .and(warp::path("user"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(client_filter.clone())
        .and_then(|username: String, client: Arc<SleeperClient>| async move {
            forward(paths::user(&decode_segment(username)), client).await
        });

    let user_leagues = warp::path("api")
        .and(warp::path("user"))
        .and(warp::path::param::<String>())
        .and(warp::path("leagues"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(client_filter.clone())
        .and_then(|user_id: String, season: String, client: Arc<SleeperClient>| async move {
            let path = paths::user_leagues(&decode_segment(user_id), &decode_segment(season));
            forward(path, client).await
        });

    let league_users = warp::path("api")
        .and(warp::path("league"))
        .and(warp::path::param::<String>())
        .and(warp::path("users"))
        .and(warp::path::end())
        .and(warp::get())
        .and(client_filter.clone())
        .and_then(|league_id: String, client: Arc<SleeperClient>| async move {
            forward(paths::league_users(&decode_segment(league_id)), client).await
        });

    let league_rosters = warp::path("api")
        .and(warp::path("league"))
        .and(warp::path::param::<String>())
        .and(warp::path("rosters"))
        .and(warp::path::end())
        .and(warp::get())
        .and(client_filter.clone())
        .and_then(|league_id: String, client: Arc<SleeperClient>| async move {
            forward(paths::league_rosters(&decode_segment(league_id)), client).await
        });

    let traded_picks = warp::path("api")
        .and(warp::path("league"))
        .and(warp::path::param::<String>())
        .and(warp::path("traded_picks"))
        .and(warp::path::end())
        .and(warp::get())
        .and(client_filter)
        .and_then(|league_id: String, client: Arc<SleeperClient>| async move {
            forward(paths::league_traded_picks(&decode_segment(league_id)), client).await
        });

    // Combine all routes
    health
        .or(players)
        .or(trending_players)
        .or(user)
        .or(user_leagues)
        .or(league_users)
        .or(league_rosters)
        .or(traded_picks)
        .with(warp::log::custom(|info| {
            info!(
                "{} {} -> {} ({:?})",
                info.method(),
                info.path(),
                info.status().as_u16(),
                info.elapsed()
            );
        }))
        .with(
            warp::cors()
                .allow_any_origin()
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET", "OPTIONS"]),
        )
}
