pub mod routes;
pub mod shared;

use shared::config::{load_config, resolve_path, ConfigSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    let (config, source) = load_config()?;

    shared::logger::init(&resolve_path(&source, &config.logging.dir))?;

    match &source {
        ConfigSource::File(path) => tracing::info!("Loaded config from: {}", path.display()),
        ConfigSource::Embedded => tracing::info!("Using default embedded configuration"),
    }

    let dist_dir = resolve_path(&source, &config.static_files.dist_dir);
    tracing::info!("Serving static files from {}", dist_dir.display());
    for asset in shared::assets::missing_assets(&dist_dir) {
        tracing::warn!("{} not found in {}", asset, dist_dir.display());
    }

    let app = routes::configure_routes(&dist_dir);

    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
