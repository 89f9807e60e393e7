use crate::checker::verify_integration;
use crate::error::IntegrationErrorExt;
use crate::model::{TechStackComponent, VerificationResult};
use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use k1_derive::api_handler;
use k1_domain::constants::INTEGRATION_TAG;
use k1_kernel::server::{ApiError, ErrorBody};
use serde::Deserialize;
use utoipa::IntoParams;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Scalar request parameters, carried in the query string.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VerifyParams {
    /// Requested `k1a` version, e.g. `2.0`
    pub k1a_version: String,
    /// Integration approach, e.g. `api` or `plugin`
    pub integration_strategy: String,
}

#[api_handler(
    post,
    path = "/integration/verify",
    params(VerifyParams),
    request_body(
        content = Vec<TechStackComponent>,
        description = "Components of the technical stack"
    ),
    responses(
        (status = OK, description = "Compatibility verdict", body = VerificationResult),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "Malformed or incomplete request",
            body = ErrorBody
        ),
        (status = INTERNAL_SERVER_ERROR, description = "Unexpected failure", body = ErrorBody),
    ),
    tag = INTEGRATION_TAG,
)]
/// Verifies whether a `k1a` version integrates with the declared tech stack.
pub async fn verify_handler(
    query: Result<Query<VerifyParams>, QueryRejection>,
    body: Result<Json<Vec<TechStackComponent>>, JsonRejection>,
) -> Result<Json<VerificationResult>, ApiError> {
    let Query(params) = query.map_err(|rejection| ApiError::Validation {
        message: rejection.body_text().into(),
        context: Some("query".into()),
    })?;
    let Json(components) = body.map_err(|rejection| ApiError::Validation {
        message: rejection.body_text().into(),
        context: Some("tech_stack_details".into()),
    })?;

    for (i, component) in components.iter().enumerate() {
        component.validate().context(format!("tech_stack_details[{i}]"))?;
    }

    Ok(Json(verify_integration(
        &params.k1a_version,
        &components,
        &params.integration_strategy,
    )))
}

/// Routes of the integration slice, generic over the application state.
pub fn integration_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    OpenApiRouter::<S>::new().routes(routes!(verify_handler))
}
