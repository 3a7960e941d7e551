use crate::shared::api_utils::{action_url, decode_error, network_error};
use contracts::shared::ClientResult;
use contracts::usecases::u508_import_csv::{ImportAction, ImportActionResponse};
use gloo_net::http::Request;

/// POST `process/<id>/` or `cancel/<id>/` relative to the current page
pub async fn post_action(
    action: ImportAction,
    file_id: &str,
) -> ClientResult<ImportActionResponse> {
    let response = Request::post(&action_url(action, file_id))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(network_error)?;

    // The backend reports business failures as JSON even with non-2xx status.
    let status = response.status();
    let ok = response.ok();
    response
        .json::<ImportActionResponse>()
        .await
        .map_err(|e| decode_error(status, ok, e))
}
