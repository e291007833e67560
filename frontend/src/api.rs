use seed::prelude::*;
use shared::{ApiError, SearchError, SearchRequest, SearchResponse};
use wasm_bindgen::JsCast;

use crate::config;

pub async fn fetch_restaurants(payload: &SearchRequest) -> Result<SearchResponse, SearchError> {
    let request = Request::new(config::api_root())
        .method(Method::Post)
        .timeout(config::search_timeout_ms())
        .json(payload)
        .map_err(|err| SearchError::Request(format!("{err:?}")))?;

    let raw = request.fetch().await.map_err(transport_error)?;
    let status = raw.status();
    if !status.is_ok() {
        let message = raw.json::<ApiError>().await.ok().map(|body| body.error);
        return Err(SearchError::Status {
            status: status.code,
            message,
        });
    }

    raw.json::<SearchResponse>()
        .await
        .map_err(|err| SearchError::Decode(format!("{err:?}")))
}

fn transport_error(err: FetchError) -> SearchError {
    let exception_name = match &err {
        FetchError::DomException(exception) => Some(exception.name()),
        FetchError::NetworkError(value) | FetchError::PromiseError(value) => value
            .dyn_ref::<web_sys::DomException>()
            .map(web_sys::DomException::name),
        _ => None,
    };
    classify_failure(exception_name.as_deref(), format!("{err:?}"))
}

/// Aborts come from the request timeout; anything else is a transport failure.
fn classify_failure(exception_name: Option<&str>, detail: String) -> SearchError {
    match exception_name {
        Some("AbortError") => SearchError::Timeout,
        _ => SearchError::Transport(detail),
    }
}
