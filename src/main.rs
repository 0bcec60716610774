use todolist::application::todo_service::ToDoEngineImpl;
use todolist::config::Config;
use todolist::http::routing::{self, todos};
use todolist::infrastructure::file_store::FileListStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let engine = ToDoEngineImpl::new(FileListStore::new(&config.store_path));
    let router = routing::app(todos::router(todos::AppState { engine }));

    tracing::info!(addr = %config.bind_addr, store = %config.store_path.display(), "listening");
    axum::serve(tokio::net::TcpListener::bind(config.bind_addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}
