//! REST handlers for the `muebles` collection.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use muebles_app::ports::FurnitureRepository;
use muebles_domain::code::FurnitureCode;
use muebles_domain::error::{MueblesError, NotFoundError};
use muebles_domain::filter::ListFilter;
use muebles_domain::furniture::Furniture;

use crate::envelope::{Envelope, messages};
use crate::error::ApiError;
use crate::extract::DraftBody;
use crate::state::AppState;

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub categoria: Option<String>,
    pub precio_gte: Option<String>,
    pub precio_lte: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Envelope<Vec<Furniture>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Envelope<Furniture>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Envelope<Furniture>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Envelope<Furniture>>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<Envelope<()>>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// A path segment that is not an integral number can never name a stored item.
fn parse_code(raw: &str) -> Result<FurnitureCode, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::from(MueblesError::from(NotFoundError {
            entity: "Furniture",
            code: raw.to_string(),
        }))
    })
}

/// `GET /api/v1/muebles`: list items, optionally filtered.
pub async fn list<FR>(
    State(state): State<AppState<FR>>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    FR: FurnitureRepository + Send + Sync + 'static,
{
    let Query(params) = query?;
    let filter = ListFilter::from_params(
        params.categoria.as_deref(),
        params.precio_gte.as_deref(),
        params.precio_lte.as_deref(),
    )
    .map_err(MueblesError::from)?;
    let items = state.furniture_service.list_furniture(filter).await?;
    Ok(ListResponse::Ok(Json(Envelope::payload(items))))
}

/// `GET /api/v1/muebles/{codigo}`: get one item.
pub async fn get<FR>(
    State(state): State<AppState<FR>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    FR: FurnitureRepository + Send + Sync + 'static,
{
    let Path(codigo) = path?;
    let code = parse_code(&codigo)?;
    let item = state.furniture_service.get_furniture(code).await?;
    Ok(GetResponse::Ok(Json(Envelope::payload(item))))
}

/// `POST /api/v1/muebles`: create an item under the next code.
pub async fn create<FR>(
    State(state): State<AppState<FR>>,
    DraftBody(draft): DraftBody,
) -> Result<CreateResponse, ApiError>
where
    FR: FurnitureRepository + Send + Sync + 'static,
{
    let created = state.furniture_service.create_furniture(draft).await?;
    Ok(CreateResponse::Created(Json(Envelope::with_message(
        messages::CREATED,
        created,
    ))))
}

/// `PUT /api/v1/muebles/{codigo}`: overwrite the supplied fields.
pub async fn update<FR>(
    State(state): State<AppState<FR>>,
    path: Result<Path<String>, PathRejection>,
    DraftBody(draft): DraftBody,
) -> Result<UpdateResponse, ApiError>
where
    FR: FurnitureRepository + Send + Sync + 'static,
{
    let Path(codigo) = path?;
    let code = parse_code(&codigo)?;
    let updated = state
        .furniture_service
        .update_furniture(code, draft)
        .await?;
    Ok(UpdateResponse::Ok(Json(Envelope::with_message(
        messages::UPDATED,
        updated,
    ))))
}

/// `DELETE /api/v1/muebles/{codigo}`: delete an item.
pub async fn delete<FR>(
    State(state): State<AppState<FR>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<DeleteResponse, ApiError>
where
    FR: FurnitureRepository + Send + Sync + 'static,
{
    let Path(codigo) = path?;
    let code = parse_code(&codigo)?;
    state.furniture_service.delete_furniture(code).await?;
    Ok(DeleteResponse::Ok(Json(Envelope::message(messages::DELETED))))
}
