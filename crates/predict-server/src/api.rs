use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use protocol::{ErrorResponse, PredictRequest, PredictResponse, PREDICTION_FAILED};
use std::time::Instant;
use url_features::extract_features;

use crate::state::AppState;

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .with_state(state)
        .layer(middleware::from_fn(log_http_request))
}

#[derive(Debug)]
pub(crate) enum ApiError {
    UrlRequired,
    BadPayload { status: StatusCode, message: String },
    Inference(anyhow::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadPayload {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::UrlRequired => (StatusCode::BAD_REQUEST, ErrorResponse::url_required()),
            ApiError::BadPayload { status, message } => (status, ErrorResponse::new(message)),
            ApiError::Inference(err) => {
                tracing::error!(error = %format!("{err:#}"), "prediction failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(PREDICTION_FAILED),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

pub(crate) async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = payload?;
    let Some(url) = request.into_url() else {
        return Err(ApiError::UrlRequired);
    };

    let features = extract_features(&url);
    let labels = state
        .classifier
        .predict(&features)
        .map_err(ApiError::Inference)?;
    let Some(&class) = labels.first() else {
        return Err(ApiError::Inference(anyhow::anyhow!(
            "classifier returned no labels"
        )));
    };

    let response = PredictResponse::new(url, class);
    tracing::debug!(
        url = %response.url,
        class = class,
        features = ?features[0],
        prediction = %response.prediction,
        "prediction served"
    );
    Ok(Json(response))
}

async fn log_http_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();
    let response = next.run(req).await;
    let status = response.status();
    tracing::info!(
        method = %method,
        uri = %uri,
        status = %status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "http request"
    );
    response
}
