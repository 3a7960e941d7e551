use crate::shared::api_utils::{csrf_token, decode_error, network_error};
use crate::shared::browser::attribute;
use contracts::domain::a025_category::{
    parent_options_from_rows, CategoryUpdate, ListingRow, ParentCategoryOption, SaveOutcome,
    UpdateCategoryResponse,
};
use contracts::shared::{CategoryEditorConfig, ClientError, ClientResult};
use gloo_net::http::Request;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomParser, Element, FormData, SupportedType};

fn js_error(context: &str) -> impl Fn(JsValue) -> ClientError + '_ {
    move |e| ClientError::parse(context).with_details(format!("{e:?}"))
}

/// Load top-level categories from the server-rendered listing
pub async fn fetch_parent_options(
    config: &CategoryEditorConfig,
) -> ClientResult<Vec<ParentCategoryOption>> {
    let response = Request::get(&config.listing_url)
        .header("X-Requested-With", "XMLHttpRequest")
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(ClientError::server(format!("HTTP {}", response.status())));
    }

    let html = response
        .text()
        .await
        .map_err(|e| ClientError::parse("Failed to read listing").with_details(e.to_string()))?;

    let rows = extract_listing_rows(&html, config)?;
    Ok(parent_options_from_rows(rows))
}

fn extract_listing_rows(
    html: &str,
    config: &CategoryEditorConfig,
) -> ClientResult<Vec<ListingRow>> {
    let parser = DomParser::new().map_err(js_error("DOMParser unavailable"))?;
    let document = parser
        .parse_from_string(html, SupportedType::TextHtml)
        .map_err(js_error("Failed to parse category listing"))?;
    let nodes = document
        .query_selector_all(&config.rows_selector)
        .map_err(js_error("Invalid rows selector"))?;

    let mut rows = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(row) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let name_cell = row.query_selector(&config.name_cell_selector).ok().flatten();
        let trigger = row.query_selector(&config.edit_trigger_selector).ok().flatten();

        rows.push(ListingRow {
            name_label: name_cell.and_then(|cell| cell.text_content()),
            id: trigger.as_ref().and_then(|t| attribute(t, "data-id")),
            name: trigger.as_ref().and_then(|t| t.get_attribute("data-name")),
        });
    }
    Ok(rows)
}

/// POST the edited category as multipart form data
pub async fn save_category(
    update: &CategoryUpdate,
    config: &CategoryEditorConfig,
) -> ClientResult<SaveOutcome> {
    let form = FormData::new().map_err(js_error("FormData unavailable"))?;
    for (name, value) in update.form_fields() {
        form.append_with_str(name, value)
            .map_err(js_error("Failed to build form data"))?;
    }

    let response = Request::post(&config.update_url)
        .header("X-CSRFToken", &csrf_token(&config.csrf_selector))
        .body(form)
        .map_err(|e| {
            ClientError::request("Failed to build request").with_details(e.to_string())
        })?
        .send()
        .await
        .map_err(network_error)?;

    let status = response.status();
    let ok = response.ok();
    let body: UpdateCategoryResponse = response
        .json()
        .await
        .map_err(|e| decode_error(status, ok, e))?;

    Ok(body.into())
}
