use address_book::shell::config::Config;
use address_book::shell::{build_state, http, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = Config::from_env()?;
    tracing::info!(
        db_path = %config.db_path.display(),
        csv_path = %config.csv_path.display(),
        "starting address book server"
    );

    let state = build_state(&config).await?;
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("listening on http://{}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
