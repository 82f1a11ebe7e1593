use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use lexicon::Category;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct CategoryTerms<'a> {
    pub category: Category,
    pub color: &'static str,
    pub color_hex: &'static str,
    pub terms: &'a [String],
}

impl<'a> CategoryTerms<'a> {
    fn new(category: Category, terms: &'a [String]) -> Self {
        Self {
            category,
            color: category.color_name(),
            color_hex: category.color_hex(),
            terms,
        }
    }
}

/// The whole lexicon, categories in declaration order
pub async fn get_lexicon(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    let lexicon = state.annotator.matcher().lexicon();
    let categories: Vec<CategoryTerms<'_>> = lexicon
        .iter()
        .map(|(category, terms)| CategoryTerms::new(category, terms))
        .collect();

    Ok(Json(serde_json::json!({
        "total_terms": lexicon.len(),
        "categories": categories,
    })))
}

/// Terms of one category; the name is matched case-insensitively
pub async fn get_category(
    State(state): State<Arc<ServerState>>,
    Path(name): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let category: Category = name
        .parse()
        .map_err(|_| ServerError::NotFound(format!("unknown category: {name}")))?;
    let terms = state.annotator.matcher().lexicon().terms(category);

    Ok(Json(serde_json::to_value(CategoryTerms::new(category, terms))
        .map_err(|e| ServerError::Internal(e.to_string()))?))
}
