use crate::error::ServerError;
use crate::state::ServerState;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use std::time::Instant;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const API_KEY_HEADER: &str = "x-api-key";

/// Longest client-supplied request id that is echoed back
const MAX_REQUEST_ID_LEN: usize = 128;

/// Request id, stored in request extensions by [`request_id`]
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// API key from `x-api-key`, else from `Authorization: Bearer <key>`.
///
/// Blank values count as absent.
pub fn api_key_from_headers(headers: &HeaderMap) -> Option<&str> {
    let from_header = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|key| !key.is_empty());

    from_header.or_else(|| {
        let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
        let (scheme, token) = value.split_once(' ')?;
        let token = token.trim();
        (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
    })
}

/// Client-supplied request id, if it is short visible ASCII
fn incoming_request_id(headers: &HeaderMap) -> Option<String> {
    let id = headers.get(REQUEST_ID_HEADER)?.to_str().ok()?.trim();
    let usable = !id.is_empty()
        && id.len() <= MAX_REQUEST_ID_LEN
        && id.bytes().all(|b| b.is_ascii_graphic());
    usable.then(|| id.to_string())
}

/// Rejects requests without a known API key, then applies the per-key rate limit
pub async fn api_key_auth(
    State(state): State<Arc<ServerState>>,
    request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let Some(key) = api_key_from_headers(request.headers()) else {
        return Err(ServerError::Authentication(
            "API key required. Provide it in 'X-API-Key' or 'Authorization: Bearer <key>' header"
                .to_string(),
        ));
    };

    if !state.is_valid_api_key(key) {
        return Err(ServerError::Authentication("Invalid API key".to_string()));
    }
    if !state.check_rate_limit(key) {
        return Err(ServerError::RateLimitExceeded);
    }

    Ok(next.run(request).await)
}

/// Tags the request with an id (the client's, or a fresh uuid v4) and echoes it
pub async fn request_id(mut request: Request, next: Next) -> Response {
    let id = incoming_request_id(request.headers())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    request.extensions_mut().insert(RequestId(id.clone()));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// One log line per request, at warn for server errors
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    let start = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::warn!(
            %method,
            %path,
            status = status.as_u16(),
            duration_ms,
            %request_id,
            "request failed"
        );
    } else {
        tracing::info!(
            %method,
            %path,
            status = status.as_u16(),
            duration_ms,
            %request_id,
            "request completed"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn api_key_header_wins_over_bearer() {
        let map = headers(&[("x-api-key", "alpha"), ("authorization", "Bearer beta")]);
        assert_eq!(api_key_from_headers(&map), Some("alpha"));
    }

    #[test]
    fn bearer_token_is_accepted() {
        assert_eq!(
            api_key_from_headers(&headers(&[("authorization", "Bearer beta")])),
            Some("beta")
        );
        assert_eq!(
            api_key_from_headers(&headers(&[("authorization", "bearer  beta ")])),
            Some("beta")
        );
    }

    #[test]
    fn missing_or_blank_keys_are_absent() {
        assert_eq!(api_key_from_headers(&HeaderMap::new()), None);
        assert_eq!(api_key_from_headers(&headers(&[("x-api-key", "  ")])), None);
        assert_eq!(
            api_key_from_headers(&headers(&[("authorization", "Basic dXNlcjpwdw==")])),
            None
        );
        // a bare token without a scheme is not a bearer credential
        assert_eq!(
            api_key_from_headers(&headers(&[("authorization", "beta")])),
            None
        );
    }

    #[test]
    fn blank_api_key_header_falls_back_to_bearer() {
        let map = headers(&[("x-api-key", ""), ("authorization", "Bearer beta")]);
        assert_eq!(api_key_from_headers(&map), Some("beta"));
    }

    #[test]
    fn incoming_request_id_is_validated() {
        assert_eq!(
            incoming_request_id(&headers(&[("x-request-id", "req-42")])),
            Some("req-42".to_string())
        );
        assert_eq!(incoming_request_id(&headers(&[("x-request-id", "a b")])), None);
        assert_eq!(incoming_request_id(&headers(&[("x-request-id", " ")])), None);
        assert_eq!(incoming_request_id(&HeaderMap::new()), None);

        let mut map = HeaderMap::new();
        let long = "x".repeat(MAX_REQUEST_ID_LEN + 1);
        map.insert(REQUEST_ID_HEADER, HeaderValue::from_str(&long).unwrap());
        assert_eq!(incoming_request_id(&map), None);
    }
}
