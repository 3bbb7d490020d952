//! # Packs: Pack Registration API
//!
//! CRUD over the pack repository. Every representation returned to a client
//! is enriched with HATEOAS links built from the request's base URL; the
//! stored pack is never modified by enrichment.
//!
//! ## Endpoints
//!
//! - `POST /v1/packs`: register a pack
//! - `GET /v1/packs`: list packs
//! - `GET /v1/packs/:id`: get a pack
//! - `DELETE /v1/packs/:id`: delete a pack
//!
//! ## Failure Handling
//!
//! Each failure is logged once, here, with the context of the operation.
//! Not-found is expected and never logged. Store failures become an opaque
//! 500.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use flyte_pack::{links, Pack, PackCollection, RepositoryError};

use crate::error::AppError;
use crate::extractors::{decode_validated_json, RequestBaseUrl, Validate};
use crate::state::AppState;

/// The name becomes the id, which appears verbatim in URLs and in the
/// `Location` header.
impl Validate for Pack {
    fn validate(&self) -> Result<(), String> {
        if self.name.chars().any(|c| c.is_ascii_control() && c != '\t') {
            return Err("pack name must not contain control characters".to_string());
        }
        Ok(())
    }
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the packs router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/packs", get(list_packs).post(create_pack))
        .route("/v1/packs/:id", get(get_pack).delete(delete_pack))
}

// ── Handlers ────────────────────────────────────────────────────────

/// POST /v1/packs: Register a pack.
///
/// The pack id is derived from its name. Responds with an empty body and a
/// `Location` header pointing at the new pack.
#[utoipa::path(
    post,
    path = "/v1/packs",
    request_body = Pack,
    responses(
        (status = 201, description = "Pack created",
            headers(("Location" = String, description = "URL of the created pack"))),
        (status = 400, description = "Body is not a valid pack", body = crate::error::ErrorBody),
        (status = 500, description = "Pack could not be stored"),
    ),
    tag = "packs"
)]
async fn create_pack(
    State(state): State<AppState>,
    RequestBaseUrl(base): RequestBaseUrl,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let mut pack: Pack = decode_validated_json(&body).map_err(reject_pack)?;
    pack.generate_id();

    let location = HeaderValue::try_from(links::pack_url(&base, &pack.id))
        .map_err(|err| reject_pack(err.to_string()))?;
    if let Err(err) = state.packs.add(pack.clone()).await {
        tracing::error!(
            "Cannot save packName={}, packLabels={}: {err}",
            pack.name,
            pack.labels_display()
        );
        return Err(AppError::Internal(err.to_string()));
    }

    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

fn reject_pack(err: String) -> AppError {
    tracing::error!("Cannot convert request to pack: {err}");
    AppError::BadRequest(err)
}

/// GET /v1/packs: List all packs.
#[utoipa::path(
    get,
    path = "/v1/packs",
    responses(
        (status = 200, description = "Pack collection", body = PackCollection),
        (status = 500, description = "Packs could not be read"),
    ),
    tag = "packs"
)]
async fn list_packs(
    State(state): State<AppState>,
    RequestBaseUrl(base): RequestBaseUrl,
) -> Result<Json<PackCollection>, AppError> {
    let packs = state.packs.find_all().await.map_err(|err| {
        tracing::error!("Cannot find packs: {err}");
        AppError::Internal(err.to_string())
    })?;

    Ok(Json(links::collection(&base, packs)))
}

/// GET /v1/packs/:id: Get a single pack with its navigational links.
#[utoipa::path(
    get,
    path = "/v1/packs/{id}",
    params(("id" = String, Path, description = "Pack id (the pack name, case-sensitive)")),
    responses(
        (status = 200, description = "Pack found", body = Pack),
        (status = 404, description = "Pack not found"),
        (status = 500, description = "Pack could not be read"),
    ),
    tag = "packs"
)]
async fn get_pack(
    State(state): State<AppState>,
    RequestBaseUrl(base): RequestBaseUrl,
    Path(id): Path<String>,
) -> Result<Json<Pack>, AppError> {
    match state.packs.get(&id).await {
        Ok(pack) => Ok(Json(links::single(&base, pack))),
        Err(RepositoryError::NotFound) => Err(AppError::NotFound(format!("pack {id}"))),
        Err(err) => {
            tracing::error!("Cannot find packId={id}: {err}");
            Err(AppError::Internal(err.to_string()))
        }
    }
}

/// DELETE /v1/packs/:id: Delete a pack.
#[utoipa::path(
    delete,
    path = "/v1/packs/{id}",
    params(("id" = String, Path, description = "Pack id (the pack name, case-sensitive)")),
    responses(
        (status = 204, description = "Pack deleted"),
        (status = 404, description = "Pack not found"),
        (status = 500, description = "Pack could not be deleted"),
    ),
    tag = "packs"
)]
async fn delete_pack(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    match state.packs.remove(&id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(RepositoryError::NotFound) => Err(AppError::NotFound(format!("pack {id}"))),
        Err(err) => {
            tracing::error!("Cannot delete packId={id}: {err}");
            Err(AppError::Internal(err.to_string()))
        }
    }
}
