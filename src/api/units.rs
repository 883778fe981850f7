//! Unit catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{TierPrice, Unit},
};

/// Priced duration options for one unit
#[derive(Serialize, ToSchema)]
pub struct UnitQuotesResponse {
    /// Unit ID
    pub unit_id: i64,
    /// All duration tiers priced for this unit, shortest first
    pub options: Vec<TierPrice>,
}

/// List all units in display order
#[utoipa::path(
    get,
    path = "/units",
    tag = "units",
    responses(
        (status = 200, description = "All rental units in seed order", body = Vec<Unit>)
    )
)]
pub async fn list_units(State(state): State<crate::AppState>) -> Json<Vec<Unit>> {
    Json(state.services.units.list_units())
}

/// Get a single unit
#[utoipa::path(
    get,
    path = "/units/{id}",
    tag = "units",
    params(
        ("id" = i64, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Unit details", body = Unit),
        (status = 404, description = "Unit not found")
    )
)]
pub async fn get_unit(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Unit>> {
    let unit = state.services.units.get_unit(id)?;
    Ok(Json(unit))
}

/// Price all duration tiers for a unit
#[utoipa::path(
    get,
    path = "/units/{id}/quotes",
    tag = "units",
    params(
        ("id" = i64, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Priced duration options", body = UnitQuotesResponse),
        (status = 404, description = "Unit not found")
    )
)]
pub async fn list_unit_quotes(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<UnitQuotesResponse>> {
    let options = state.services.units.quote_options(id)?;
    Ok(Json(UnitQuotesResponse {
        unit_id: id,
        options,
    }))
}
