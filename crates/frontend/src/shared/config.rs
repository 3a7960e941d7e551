use contracts::shared::EnhancementsConfig;

/// id of the optional `<script type="application/json">` override block
pub const CONFIG_ELEMENT_ID: &str = "admin-enhancements-config";

/// Read configuration overrides from the page
///
/// An invalid override is logged and replaced by the defaults.
pub fn load_page_config() -> EnhancementsConfig {
    let raw = super::browser::document()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match EnhancementsConfig::from_override(raw.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
            EnhancementsConfig::default()
        }
    }
}
