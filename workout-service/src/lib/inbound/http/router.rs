use std::sync::Arc;
use std::time::Duration;

use auth::IdentityResolver;
use axum::body::Body;
use axum::http::HeaderValue;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::AllowHeaders;
use tower_http::cors::AllowMethods;
use tower_http::cors::AllowOrigin;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health::health_check;
use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::register::register;
use super::handlers::routines::create_routine;
use super::handlers::routines::delete_routine;
use super::handlers::routines::list_routines;
use super::handlers::workouts::create_workout;
use super::handlers::workouts::delete_workout;
use super::handlers::workouts::get_workout;
use super::handlers::workouts::list_workouts;
use super::middleware::authenticate as auth_middleware;
use crate::domain::routine::ports::RoutineServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::domain::workout::ports::WorkoutServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub workout_service: Arc<dyn WorkoutServicePort>,
    pub routine_service: Arc<dyn RoutineServicePort>,
    pub identity_resolver: IdentityResolver,
}

pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    let public_routes = Router::new()
        .route("/", get(health_check))
        .route("/auth", post(register))
        .route("/auth/token", post(login));

    let protected_routes = Router::new()
        .route("/auth/me", get(me))
        .route("/workouts", get(list_workouts).post(create_workout))
        // Static segment wins over the `:workout_id` capture
        .route("/workouts/workouts", get(list_workouts))
        .route(
            "/workouts/:workout_id",
            get(get_workout).delete(delete_workout),
        )
        .route("/routines", get(list_routines).post(create_routine))
        .route("/routines/:routine_id", delete(delete_routine))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// CORS for the configured origins; methods and headers echo the preflight.
fn cors_layer(cors_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
