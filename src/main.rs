use header_echo::{build_app, config::Config, logging, shutdown_signal};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let bind_socket = Config::default().bind_socket();
    let listener = tokio::net::TcpListener::bind(bind_socket)
        .await
        .inspect_err(|err| error!(error = %err, %bind_socket, "failed to bind listener"))?;

    info!(%bind_socket, "server starting");

    axum::serve(listener, build_app().into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}
