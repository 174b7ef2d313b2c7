use thiserror::Error;

/// Recoverable per-URL failure; the pipeline records it and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Fetch a page with a single attempt and the transport's default timeouts.
pub fn fetch(url: &str) -> Result<String, FetchError> {
    let response = reqwest::blocking::get(url).map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;

    if !response.status().is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response.text().map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = FetchError::Status {
            url: "http://example.com/missing".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        let msg = err.to_string();
        assert!(msg.contains("http://example.com/missing"));
        assert!(msg.contains("404"));
    }
}
