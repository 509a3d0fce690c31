#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

use crate::{
    config::RuntimeConfiguration,
    error::{BindListenerSnafu, MahasiswaResult, ServeSnafu},
    routes::mahasiswa::{
        delete_mahasiswa, get_index, internal_get_close_modal, internal_get_mahasiswa,
        internal_get_open_modal, internal_post_field, post_mahasiswa,
    },
    state::MahasiswaState,
};
use axum::{
    Router,
    routing::{get, post},
};
use snafu::ResultExt;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod api;
mod config;
mod data;
mod error;
mod maud_conveniences;
mod routes;
mod screen;
mod state;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
}

pub fn router(state: MahasiswaState) -> Router {
    Router::new()
        .route("/", get(get_index))
        .route(
            "/mahasiswa",
            post(post_mahasiswa).delete(delete_mahasiswa),
        )
        .route("/internal/mahasiswa", get(internal_get_mahasiswa))
        .route("/internal/modal/open", get(internal_get_open_modal))
        .route("/internal/modal/close", get(internal_get_close_modal))
        .route("/internal/modal/field", post(internal_post_field))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn serve(config: RuntimeConfiguration) -> MahasiswaResult<()> {
    let state = MahasiswaState::new(config)?;
    let server_ip = state.config().server_ip().to_string();

    let listener = TcpListener::bind(&server_ip)
        .await
        .context(BindListenerSnafu { addr: &server_ip })?;

    info!(?server_ip, "Listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context(ServeSnafu)
}

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");
    if let Err(e) = dotenv {
        //no .env is fine, everything has a default
        warn!(?e, "not loading .env");
    }

    let config = RuntimeConfiguration::new().expect("unable to create config");
    if let Err(e) = serve(config).await {
        error!(?e, "Error serving app");
        std::process::exit(1);
    }
}
