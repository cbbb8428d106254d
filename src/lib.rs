use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    serve::Serve,
    Json, Router,
};

use color_eyre::eyre::Result;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::error::Error;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Level;

use domain::MemberAPIError;
pub mod routes;
use crate::utils::{constants::MAX_DB_CONNECTIONS, tracing::*};
use routes::{get_member, get_member_list, register_member};
pub mod app_state;
pub mod domain;
pub mod services;
use app_state::AppState;
pub mod utils;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for MemberAPIError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            MemberAPIError::DuplicateNameError(name) => {
                log_error_chain(&self, Level::DEBUG);
                (
                    StatusCode::CONFLICT,
                    format!("Member already exists: {name}"),
                )
            }
            MemberAPIError::IDNotFoundError(id) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::NOT_FOUND, format!("Member not found: {id}"))
            }
            MemberAPIError::MalformedRequestError(rejection) => {
                log_error_chain(&self, Level::DEBUG);
                (rejection.status(), rejection.body_text())
            }
            MemberAPIError::ValidationError(e) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::BAD_REQUEST, e.as_ref().to_owned())
            }
            MemberAPIError::UnexpectedError(_) => {
                log_error_chain(&self, Level::ERROR);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected error".to_string(),
                )
            }
        };
        let body = Json(ErrorResponse {
            error: error_message,
        });
        (status, body).into_response()
    }
}

fn log_error_chain(e: &(dyn Error + 'static), debug_level: Level) {
    let separator =
        "\n-----------------------------------------------------------------------------------\n";
    let mut report = format!("{}{:?}\n", separator, e);
    let mut current = e.source();
    while let Some(cause) = current {
        let str = format!("Caused by:\n\n{:?}", cause);
        report = format!("{}\n{}", report, str);
        current = cause.source();
    }
    report = format!("{}\n{}", report, separator);
    match debug_level {
        Level::ERROR => tracing::error!("{}", report),
        Level::WARN => tracing::warn!("{}", report),
        Level::INFO => tracing::info!("{}", report),
        Level::DEBUG => tracing::debug!("{}", report),
        Level::TRACE => tracing::trace!("{}", report),
    }
}

pub struct Application {
    server: Serve<Router, Router>,
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self> {
        let allowed_origins: [HeaderValue; 2] = [
            "http://localhost:3000".parse()?,
            "http://127.0.0.1:3000".parse()?,
        ];

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST])
            .allow_origin(allowed_origins);

        let router = Router::new()
            .route("/members", get(get_member_list).post(register_member))
            .route("/members/:member_id", get(get_member))
            .with_state(app_state)
            .layer(cors)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            );

        let listener = tokio::net::TcpListener::bind(address).await?;
        let address = listener.local_addr()?.to_string();
        let server = axum::serve(listener, router);

        Ok(Application { server, address })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        self.server.with_graceful_shutdown(shutdown_signal()).await
    }
}

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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

pub async fn get_postgres_pool(
    url: &Secret<String>,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_DB_CONNECTIONS)
        .connect(url.expose_secret())
        .await
}

#[tracing::instrument(name = "Configuring PostgreSQL", skip_all)]
pub async fn configure_postgresql(url: &Secret<String>) -> Result<PgPool> {
    let pool = get_postgres_pool(url).await?;
    sqlx::migrate!().run(&pool).await?;
    Ok(pool)
}
