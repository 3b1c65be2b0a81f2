use std::path::PathBuf;
use std::time::{Duration, Instant};

use eyre::WrapErr;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use simplr_server::config::ServerConfig;
use simplr_server::router;
use simplr_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config_path = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "simplr.toml".to_string()),
    );

    let mut config = ServerConfig::load_or_default(&config_path)?;
    config.apply_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("simplr=info,tower_http=info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if config.server.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::info!(
        config = %config_path.display(),
        github_owner = %config.github.owner,
        model = %config.gemini.model,
        trailer_image = %config.report.trailer_image.display(),
        "configuration loaded"
    );
    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; explanation requests will fail");
    }

    let addr = config.bind_addr();
    let state = AppState::new(config)?;

    let sessions = state.sessions.clone();
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(Duration::from_secs(60));
        loop {
            tick.tick().await;
            sessions.expire_idle(Instant::now()).await;
        }
    });

    let app = router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
