mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, startup, state::AppState, util::token::TokenKeys,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let tokens = TokenKeys::new(&config.jwt_secret, config.jwt_access_ttl_secs);

    let app = router::router().with_state(AppState::new(db, tokens, config.admin_user_id));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
