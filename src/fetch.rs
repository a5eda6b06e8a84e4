//! Fetching and parsing story documents.
//!
//! One HTTP GET per call, gated on the response `Content-Type` before the
//! body is parsed. The body is treated as YAML, which also covers JSON.
//! Uses `gloo-net` in the browser and `reqwest` everywhere else.

use thiserror::Error;

use crate::story::UserStory;

/// Everything that can go wrong between issuing the GET and holding a
/// parsed [`UserStory`]. Callers collapse this to a display string; none of
/// the variants are recoverable.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fetch {path}: Unacceptable content type: {content_type}")]
    ContentType { path: String, content_type: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Suffix match on the `Content-Type` header value.
///
/// Accepts anything ending in `json` or `yaml`, which covers
/// `application/json`, `text/yaml`, `application/x-yaml` and friends.
/// Known fragile: `text/plain; x=json` passes while
/// `application/json; charset=utf-8` does not.
pub fn acceptable_content_type(value: &str) -> bool {
    value.ends_with("json") || value.ends_with("yaml")
}

/// GETs `path` and parses the body into a [`UserStory`].
///
/// A missing `Content-Type` header is treated as empty and rejected.
pub async fn fetch_document(path: &str) -> Result<UserStory, FetchError> {
    let (content_type, body) = get(path).await?;
    if !acceptable_content_type(&content_type) {
        return Err(FetchError::ContentType {
            path: path.to_string(),
            content_type,
        });
    }
    Ok(serde_yaml::from_str(&body)?)
}

/// Browser GET, returning the content type and body text.
#[cfg(target_arch = "wasm32")]
async fn get(path: &str) -> Result<(String, String), FetchError> {
    use gloo_net::http::Request;

    let res = Request::get(path)
        .send()
        .await
        .map_err(|e| FetchError::Network(format!("{e:?}")))?;
    let content_type = res.headers().get("Content-Type").unwrap_or_default();
    let body = res
        .text()
        .await
        .map_err(|e| FetchError::Network(format!("{e:?}")))?;
    Ok((content_type, body))
}

/// Native GET, returning the content type and body text.
#[cfg(not(target_arch = "wasm32"))]
async fn get(path: &str) -> Result<(String, String), FetchError> {
    let res = reqwest::Client::new()
        .get(path)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let content_type = res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = res
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    Ok((content_type, body))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_json_and_yaml_suffixes() {
        assert!(acceptable_content_type("application/json"));
        assert!(acceptable_content_type("text/yaml"));
        assert!(acceptable_content_type("application/x-yaml"));
    }

    #[test]
    fn rejects_other_content_types() {
        assert!(!acceptable_content_type("text/plain"));
        assert!(!acceptable_content_type("text/html; charset=utf-8"));
        // missing header is passed through as the empty string
        assert!(!acceptable_content_type(""));
    }

    #[test]
    fn suffix_match_does_not_strip_parameters() {
        // parameters that happen to end in the match string slip through
        assert!(acceptable_content_type("text/plain; x=json"));
        assert!(!acceptable_content_type("application/json; charset=utf-8"));
    }

    #[test]
    fn yaml_body_parses_into_a_story() {
        let body = "\
name: Checkout flow
tags: [web, payments]
description: As a shopper I want to pay
tasks:
  - name: cart
    status: todo
  - name: payment
    description: stripe only
    status: in progress
";
        let story: UserStory = serde_yaml::from_str(body).unwrap();
        assert_eq!(story.name, "Checkout flow");
        assert_eq!(story.tags, vec!["web".to_string(), "payments".to_string()]);
        assert_eq!(story.tasks.len(), 2);
        assert_eq!(story.tasks[0].name, "cart");
        assert_eq!(story.tasks[0].description, None);
        assert_eq!(story.tasks[1].status, "in progress");
    }

    #[test]
    fn json_body_is_valid_yaml() {
        let body = json!({
            "name": "Checkout flow",
            "tags": ["web"],
            "tasks": [{ "name": "cart", "status": "todo" }],
        })
        .to_string();
        let story: UserStory = serde_yaml::from_str(&body).unwrap();
        assert_eq!(story.name, "Checkout flow");
        assert_eq!(story.tasks[0].status, "todo");
    }

    #[test]
    fn content_type_error_names_path_and_header() {
        let err = FetchError::ContentType {
            path: "/stories/a.yaml".into(),
            content_type: "text/plain".into(),
        };
        assert_eq!(
            err.to_string(),
            "fetch /stories/a.yaml: Unacceptable content type: text/plain"
        );
    }

    #[test]
    fn network_error_carries_rejection_reason() {
        let err = FetchError::Network("connection refused".into());
        assert_eq!(err.to_string(), "network error: connection refused");
    }

    #[test]
    fn parse_error_wraps_yaml_error() {
        let err: FetchError = serde_yaml::from_str::<UserStory>("{ not yaml")
            .unwrap_err()
            .into();
        assert!(matches!(err, FetchError::Parse(_)));
        assert!(err.to_string().starts_with("parse error:"));
    }
}
