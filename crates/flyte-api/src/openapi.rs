//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec, served
//! at `/openapi.json`. The same document is served at `/swagger`, the target
//! of the documentation relations (`{base}/swagger#/pack` and friends) that
//! the link builder emits.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Flyte API: Packs",
        version = "0.1.0",
        description = "Pack registration for Flyte: packs declare the commands they execute and the events they emit. Every representation carries HATEOAS links.",
        license(name = "Apache-2.0")
    ),
    paths(
        crate::routes::packs::create_pack,
        crate::routes::packs::list_packs,
        crate::routes::packs::get_pack,
        crate::routes::packs::delete_pack,
    ),
    components(schemas(
        flyte_pack::Pack,
        flyte_pack::Command,
        flyte_pack::Event,
        flyte_pack::Link,
        flyte_pack::PackCollection,
        flyte_pack::PackSummary,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "packs", description = "Pack registration API"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/openapi.json", get(openapi_json))
        .route("/swagger", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
