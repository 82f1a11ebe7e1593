use crate::error::{ErrorDetail, ServerError, ServerResult};
use crate::middleware::RequestId;
use crate::state::ServerState;
use annotate::{AnnotatedDocument, MarkupStyle};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request to annotate a single text
#[derive(Debug, Deserialize)]
pub struct AnnotateRequest {
    pub text: String,

    /// Markup style override (`html` or `bracket`)
    #[serde(default)]
    pub markup: Option<MarkupStyle>,
}

#[derive(Debug, Serialize)]
pub struct AnnotateResponse {
    pub request_id: String,
    #[serde(flatten)]
    pub document: AnnotatedDocument,
}

/// Batch annotation request
#[derive(Debug, Deserialize)]
pub struct BatchAnnotateRequest {
    pub documents: Vec<BatchDocument>,

    #[serde(default)]
    pub markup: Option<MarkupStyle>,
}

/// Single document in a batch
#[derive(Debug, Deserialize)]
pub struct BatchDocument {
    #[serde(default)]
    pub doc_id: Option<String>,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct BatchItemResponse {
    pub doc_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<AnnotatedDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Serialize)]
pub struct BatchAnnotateResponse {
    pub request_id: String,
    pub processed: usize,
    pub successful: usize,
    pub failed: usize,
    pub results: Vec<BatchItemResponse>,
}

/// Annotate one text.
///
/// ```json
/// // Request
/// { "text": "Started metformin for nausea.", "markup": "bracket" }
///
/// // Response
/// {
///   "request_id": "…",
///   "matches": { "Drug": [ … ], … },
///   "markup": "Started [metformin](Drug 99.0%) for [nausea](Symptom 92.8%).",
///   "rows": [ { "Entity": "metformin", "Type": "Drug", … } ],
///   "summary": { "Disease": 0, "Drug": 1, … },
///   "annotate_version": 1
/// }
/// ```
pub async fn annotate_document(
    State(state): State<Arc<ServerState>>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    Json(request): Json<AnnotateRequest>,
) -> ServerResult<impl IntoResponse> {
    let document = state.annotate(&request.text, request.markup)?;

    tracing::debug!(
        request_id = %request_id,
        entities = document.total_entities(),
        "annotated document"
    );

    Ok(Json(AnnotateResponse {
        request_id,
        document,
    }))
}

/// Annotate many documents concurrently.
///
/// Per-document failures are reported inline; results keep input order.
pub async fn annotate_batch(
    State(state): State<Arc<ServerState>>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    Json(request): Json<BatchAnnotateRequest>,
) -> ServerResult<impl IntoResponse> {
    let max = state.config.max_batch_size;
    if request.documents.len() > max {
        return Err(ServerError::BadRequest(format!(
            "batch of {} documents exceeds the limit of {max}",
            request.documents.len()
        )));
    }

    let concurrency = state.config.batch_concurrency.max(1);
    let markup = request.markup;

    let mut results: Vec<(usize, BatchItemResponse)> =
        stream::iter(request.documents.into_iter().enumerate().map(|(idx, doc)| {
            let state = Arc::clone(&state);

            async move {
                let doc_id = doc
                    .doc_id
                    .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

                let outcome =
                    tokio::task::spawn_blocking(move || state.annotate(&doc.text, markup)).await;

                let result = match outcome {
                    Ok(Ok(document)) => Ok(document),
                    Ok(Err(err)) => Err(ServerError::from(err)),
                    Err(join) => Err(ServerError::Internal(join.to_string())),
                };

                let response = match result {
                    Ok(document) => BatchItemResponse {
                        doc_id,
                        status: "success".to_string(),
                        document: Some(document),
                        error: None,
                    },
                    Err(err) => BatchItemResponse {
                        doc_id,
                        status: "error".to_string(),
                        document: None,
                        error: Some(err.detail()),
                    },
                };
                (idx, response)
            }
        }))
        .buffer_unordered(concurrency)
        .collect()
        .await;

    results.sort_by_key(|(idx, _)| *idx);

    let successful = results
        .iter()
        .filter(|(_, r)| r.status == "success")
        .count();
    let failed = results.len() - successful;

    let results: Vec<BatchItemResponse> = results.into_iter().map(|(_, r)| r).collect();

    tracing::info!(
        request_id = %request_id,
        processed = results.len(),
        failed,
        "batch annotated"
    );

    Ok(Json(BatchAnnotateResponse {
        request_id,
        processed: results.len(),
        successful,
        failed,
        results,
    }))
}
