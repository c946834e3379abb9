use std::sync::Arc;

use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use workout_service::config::Config;
use workout_service::inbound::http::router::create_router;
use workout_service::inbound::http::router::AppState;
use workout_service::repositories::PostgresRoutineRepository;
use workout_service::repositories::PostgresUserRepository;
use workout_service::repositories::PostgresWorkoutRepository;
use workout_service::routine::service::RoutineService;
use workout_service::user::service::UserService;
use workout_service::workout::service::WorkoutService;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workout_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "workout-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    let token_settings = config.jwt.token_settings()?;

    tracing::info!(
        http_port = config.server.http_port,
        cors_origins = ?config.server.cors_origins,
        jwt_algorithm = ?token_settings.algorithm(),
        jwt_ttl_minutes = token_settings.ttl().num_minutes(),
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(&token_settings));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let workout_repository = Arc::new(PostgresWorkoutRepository::new(pg_pool.clone()));
    let routine_repository = Arc::new(PostgresRoutineRepository::new(pg_pool));

    let state = AppState {
        user_service: Arc::new(UserService::new(
            user_repository,
            Arc::clone(&authenticator),
        )),
        workout_service: Arc::new(WorkoutService::new(Arc::clone(&workout_repository))),
        routine_service: Arc::new(RoutineService::new(routine_repository, workout_repository)),
        identity_resolver: authenticator.resolver(),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state, &config.server.cors_origins);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}
