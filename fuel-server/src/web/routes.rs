//! HTTP route handlers.

use std::path::Path as FsPath;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::domain::{Region, Station, StationId};
use crate::registry::RegistryError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<FsPath>) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/health", get(health))
        .route("/change-price", post(change_price_form))
        .route("/stations/:id", get(station_page))
        .route("/api/stations", get(list_stations))
        .route("/api/levels/region/:region", get(region_levels))
        .route("/api/levels/station/:id", get(station_levels))
        .route("/api/prices/region/:region", post(set_region_prices))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Dashboard with map, price form, station list and any flash message.
async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, AppError> {
    let stations = state.registry.list_all().await;
    let regions = state.registry.regions().await;

    let markers_json = markers_json(&stations).map_err(|e| AppError::Internal {
        message: format!("Failed to serialize map markers: {}", e),
    })?;

    let template = DashboardTemplate {
        flash: FlashView::from_query(&query),
        regions: regions.into_iter().map(String::from).collect(),
        stations: stations.iter().map(StationView::from_station).collect(),
        markers_json,
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// Price-change form submission.
///
/// Always redirects back to the dashboard, with the outcome in the query
/// string so the dashboard can show a flash message.
async fn change_price_form(
    State(state): State<AppState>,
    Form(form): Form<PriceForm>,
) -> Result<Redirect, AppError> {
    // Only echo the region back when it is safe to put in a URL.
    let region_param = Region::parse(&form.region)
        .map(|r| format!("&region={r}"))
        .unwrap_or_default();

    let gasoline = form.gasoline_input();
    let diesel = form.diesel_input();

    if gasoline.is_none() && diesel.is_none() {
        info!(region = %form.region, "price form submitted without prices");
        return Ok(Redirect::to(&format!("/?outcome=no_prices{region_param}")));
    }

    match state
        .registry
        .update_prices_by_region(&form.region, gasoline.as_ref(), diesel.as_ref())
        .await
    {
        Ok(count) => {
            info!(region = %form.region, count, "prices updated from form");
            Ok(Redirect::to(&format!(
                "/?outcome=updated{region_param}&count={count}"
            )))
        }
        Err(RegistryError::InvalidPrice(e)) => {
            warn!(region = %form.region, error = %e, "price form rejected");
            Ok(Redirect::to(&format!(
                "/?outcome=invalid_price{region_param}"
            )))
        }
        Err(e) => Err(AppError::from(e)),
    }
}

/// Station detail page.
async fn station_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let station = match lookup_station(&state, &id).await {
        Ok(station) => station,
        Err(AppError::NotFound { message }) => {
            warn!("{message}");
            return html_error(StatusCode::NOT_FOUND, "Station not found", message);
        }
        Err(e) => return e.into_response(),
    };

    let template = StationTemplate {
        station: StationView::from_station(&station),
    };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => AppError::Internal {
            message: format!("Template error: {}", e),
        }
        .into_response(),
    }
}

/// All stations, ordered by id.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<Station>> {
    Json(state.registry.list_all().await)
}

/// Stations in a region (case-insensitive).
async fn region_levels(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Json<Vec<Station>> {
    Json(state.registry.find_by_region(&region).await)
}

/// A single station.
async fn station_levels(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Station>, AppError> {
    lookup_station(&state, &id).await.map(Json)
}

/// Set prices for every station in a region.
async fn set_region_prices(
    State(state): State<AppState>,
    Path(region): Path<String>,
    body: Bytes,
) -> Result<Json<PriceUpdateResponse>, AppError> {
    let req: PriceUpdateRequest = if body.iter().all(u8::is_ascii_whitespace) {
        PriceUpdateRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            warn!(body = %String::from_utf8_lossy(&body), "invalid price update body");
            AppError::BadRequest {
                message: format!("Invalid JSON: {e}"),
            }
        })?
    };

    let updated = state
        .registry
        .update_prices_by_region(
            &region,
            req.gasoline_price.as_ref(),
            req.diesel_price.as_ref(),
        )
        .await?;

    info!(%region, updated, "prices updated via API");

    Ok(Json(PriceUpdateResponse {
        message: format!("Prices updated for {updated} stations."),
        region,
        updated,
    }))
}

/// Parse a station id from the path and look it up.
///
/// Ids that are not numbers can't name a station, so they are reported as
/// not found rather than as a bad request.
async fn lookup_station(state: &AppState, raw_id: &str) -> Result<Station, AppError> {
    let id = raw_id
        .parse::<u32>()
        .map(StationId)
        .map_err(|_| AppError::NotFound {
            message: format!("station {raw_id} not found"),
        })?;

    Ok(state.registry.find_by_id(id).await?)
}

/// Render the HTML error page with the given status.
fn html_error(status: StatusCode, title: &str, message: String) -> Response {
    let template = ErrorTemplate {
        title: title.to_string(),
        message,
    };
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => AppError::Internal {
            message: format!("Template error: {}", e),
        }
        .into_response(),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<RegistryError> for AppError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::NotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            RegistryError::InvalidPrice(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
