//! API utilities for talking to the admin backend
//!
//! All endpoints are relative to the current admin page, so no base URL is needed.

use contracts::shared::ClientError;
use contracts::usecases::u508_import_csv::ImportAction;

/// Build the per-file endpoint path for an import action
///
/// # Example
/// ```ignore
/// let url = action_url(ImportAction::Start, "12");
/// assert_eq!(url, "process/12/");
/// ```
pub fn action_url(action: ImportAction, file_id: &str) -> String {
    format!(
        "{}/{}/",
        action.path_segment(),
        urlencoding::encode(file_id.trim())
    )
}

/// Read the CSRF token from the first matching hidden field
///
/// Returns an empty string when the page has no such field.
pub fn csrf_token(selector: &str) -> String {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Convert a transport error into a network `ClientError`
pub fn network_error(err: gloo_net::Error) -> ClientError {
    ClientError::network("Failed to send request").with_details(err.to_string())
}

/// Error for a response body that could not be decoded
///
/// A non-2xx status is reported as a server error, otherwise as a parse error.
pub fn decode_error(status: u16, ok: bool, err: gloo_net::Error) -> ClientError {
    if ok {
        ClientError::parse("Failed to parse response").with_details(err.to_string())
    } else {
        ClientError::server(format!("HTTP {}", status)).with_details(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_url() {
        assert_eq!(action_url(ImportAction::Start, "12"), "process/12/");
        assert_eq!(action_url(ImportAction::Cancel, " 12 "), "cancel/12/");
    }

    #[test]
    fn test_action_url_encodes_id() {
        assert_eq!(action_url(ImportAction::Start, "a/b"), "process/a%2Fb/");
    }
}
