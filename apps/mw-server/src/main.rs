//! HTTP frontend for the molecular weight calculator.
//!
//! `GET /` serves the calculator page; `POST /calculate` takes
//! `{"formula": "..."}` and answers `{"molecular_weight": n}` or
//! `{"error": "..."}` with a 400 for bad input and a 500 for anything
//! unclassified.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use mw_app::{ErrorResponse, WeightRequest, WeightResponse, compute_weight};
use mw_elements::PeriodicTable;

#[derive(Parser)]
#[command(name = "mw-server")]
#[command(about = "Molecular weight calculator web service", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[derive(Clone)]
struct ServerState {
    provider: Arc<PeriodicTable>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let state = ServerState {
        provider: Arc::new(PeriodicTable::new()),
    };

    let app = Router::new()
        .route("/", get(home))
        .route("/calculate", post(calculate))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}

async fn home() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

async fn calculate(
    State(state): State<ServerState>,
    body: Result<Json<WeightRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = body else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "No formula provided. Please provide a valid chemical formula.",
        );
    };

    match compute_weight(&request.formula, state.provider.as_ref()) {
        Ok(weight) => {
            tracing::debug!(formula = %request.formula, weight, "computed molecular weight");
            Json(WeightResponse {
                molecular_weight: weight,
            })
            .into_response()
        }
        Err(err) if err.is_client_error() => {
            tracing::debug!(formula = %request.formula, error = %err, "rejected formula");
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
        Err(err) => {
            tracing::error!(formula = %request.formula, error = %err, "weight computation failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("An unexpected error occurred: {err}"),
            )
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
