use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use dn_core::NewsDataset;
use dn_inference::phrases::DEFAULT_PHRASE_COUNT;

use crate::AppState;

const MAX_PHRASE_COUNT: usize = 20;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunResponse {
    success: bool,
    message: String,
    news_count: usize,
}

#[derive(Serialize)]
struct NewsListResponse {
    #[serde(flatten)]
    dataset: NewsDataset,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Serialize)]
struct SummarizeResponse {
    summary: String,
}

#[derive(Serialize)]
struct PhrasesResponse {
    phrases: Vec<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

fn bad_request(error: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
            message: None,
        }),
    )
        .into_response()
}

fn internal_error(error: &str, source: &dn_core::Error) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: error.to_string(),
            message: Some(source.to_string()),
        }),
    )
        .into_response()
}

/// Trigger endpoint: runs the whole pipeline and persists the result.
/// Answers both GET (manual runs) and POST (scheduled runs).
pub async fn run_daily_news(State(state): State<Arc<AppState>>) -> Response {
    match state.pipeline.run().await {
        Ok(dataset) => (
            StatusCode::OK,
            Json(RunResponse {
                success: true,
                message: "News processed and saved successfully".to_string(),
                news_count: dataset.news.len(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Error processing news: {}", e);
            internal_error("Failed to process news", &e)
        }
    }
}

/// Returns the persisted dataset verbatim, or the empty sentinel with an
/// explanatory message when nothing has been saved yet.
pub async fn news_list(State(state): State<Arc<AppState>>) -> Response {
    match state.store.load().await {
        Ok(dataset) => {
            let message = dataset.is_empty().then(|| {
                "No news data available yet. Please run the daily-news API first.".to_string()
            });
            (StatusCode::OK, Json(NewsListResponse { dataset, message })).into_response()
        }
        Err(e) => {
            error!("Error reading news data: {}", e);
            internal_error("Failed to read news data", &e)
        }
    }
}

#[derive(Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SummarizeRequest>,
) -> Response {
    if body.title.is_empty() || body.content.is_empty() {
        return bad_request("Title and content are required");
    }

    match state.summarizer.summarize(&body.title, &body.content).await {
        Ok(summary) => (StatusCode::OK, Json(SummarizeResponse { summary })).into_response(),
        Err(e) => {
            error!("Error in summarize API: {}", e);
            internal_error("Failed to generate summary", &e)
        }
    }
}

#[derive(Deserialize)]
pub struct PhrasesRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    summary: String,
    count: Option<usize>,
}

pub async fn phrases(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PhrasesRequest>,
) -> Response {
    if body.title.is_empty() || body.summary.is_empty() {
        return bad_request("Title and summary are required");
    }

    let count = body
        .count
        .unwrap_or(DEFAULT_PHRASE_COUNT)
        .clamp(1, MAX_PHRASE_COUNT);

    match state
        .generator
        .generate(&body.title, &body.summary, count)
        .await
    {
        Ok(phrases) => (StatusCode::OK, Json(PhrasesResponse { phrases })).into_response(),
        Err(e) => {
            error!("Error in phrases API: {}", e);
            internal_error("Failed to generate phrases", &e)
        }
    }
}
