use axum::Router;
use k1::domain::constants::SERVICE_NAME;
use k1::kernel::server::{ApiState, panic_response};
use k1::server::router::{integration_router, system_router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

const DESCRIPTION: &str = "\
    The user inquiries about 'k1a' initiated discussions to clarify its meaning, given its \
    ambiguous nature without a specific context. Through iterative questioning, it was \
    determined that 'k1a' does not directly relate to widely recognized technology, \
    methodology, or project within the provided technical stack of Python, FastAPI, \
    PostgreSQL, and Prisma. It's concluded that 'k1a' might be a term, abbreviation, or \
    identifier specific to the user's project or a lesser-known aspect of the Python \
    ecosystem or related to FastAPI, PostgreSQL, or Prisma technologies. Further \
    clarification from the user revealed that 'k1a' is likely internal or niche, with no \
    direct association to the technologies specified.";

#[derive(OpenApi)]
struct ApiDoc;

fn openapi() -> utoipa::openapi::OpenApi {
    let mut api = ApiDoc::openapi();
    api.info.title = SERVICE_NAME.to_owned();
    api.info.description = Some(DESCRIPTION.to_owned());
    api
}

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let routes = OpenApiRouter::new().merge(system_router()).merge(integration_router());
    assemble(routes, state)
}

/// Wraps `routes` with panic recovery and request tracing, then mounts the Scalar UI.
fn assemble(routes: OpenApiRouter<ApiState>, state: ApiState) -> Router {
    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(openapi())
        .merge(routes)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);

    Router::new().merge(openapi_routes).merge(scalar_routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use k1_database::Database;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn state() -> ApiState {
        let db = Database::builder()
            .url("mem://")
            .session("k1", "core")
            .init()
            .await
            .expect("mem:// database");
        ApiState::builder().db(db).build().expect("state")
    }

    async fn exploding_handler() -> &'static str {
        panic!("handler exploded")
    }

    #[tokio::test]
    async fn panicking_handler_yields_json_500() {
        let routes = OpenApiRouter::new()
            .merge(system_router())
            .route("/explode", get(exploding_handler));
        let app = assemble(routes, state().await);

        let response = app
            .clone()
            .oneshot(Request::get("/explode").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let json: Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(json, serde_json::json!({"error": "Internal server error"}));

        let health = app
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(health.status(), StatusCode::OK);
    }

    #[test]
    fn document_uses_service_name_and_description() {
        let api = openapi();
        assert_eq!(api.info.title, SERVICE_NAME);
        assert_eq!(api.info.description.as_deref(), Some(DESCRIPTION));
    }
}
