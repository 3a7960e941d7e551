use serde::{Deserialize, Serialize};

/// 50 MiB
pub const DEFAULT_MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// Настройки обоих улучшений страницы.
///
/// Значения по умолчанию соответствуют стандартной разметке админки.
/// Страница может переопределить любое поле JSON-островом
/// `<script type="application/json" id="admin-enhancements-config">`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancementsConfig {
    pub category_editor: CategoryEditorConfig,
    pub csv_import: CsvImportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryEditorConfig {
    pub listing_url: String,
    pub update_url: String,
    pub rows_selector: String,
    pub name_cell_selector: String,
    pub edit_trigger_selector: String,
    pub csrf_selector: String,
}

impl Default for CategoryEditorConfig {
    fn default() -> Self {
        Self {
            listing_url: "/admin/shop/category/".to_string(),
            update_url: "/admin/shop/category/update_category/".to_string(),
            rows_selector: "table.results tbody tr".to_string(),
            name_cell_selector: ".field-tree_name".to_string(),
            edit_trigger_selector: ".btn-edit-category".to_string(),
            csrf_selector: "[name=csrfmiddlewaretoken]".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvImportConfig {
    pub toolbar_selector: String,
    pub upload_href: String,
    pub file_input_id: String,
    pub max_file_bytes: u64,
    pub expected_extension: String,
    pub redirect_delay_ms: u32,
    pub reload_after_start_ms: u32,
    pub reload_after_cancel_ms: u32,
    pub notification_ttl_ms: u32,
    pub auto_refresh_ms: u32,
}

impl Default for CsvImportConfig {
    fn default() -> Self {
        Self {
            toolbar_selector: ".changelist-search".to_string(),
            upload_href: "upload/".to_string(),
            file_input_id: "id_csv_file".to_string(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            expected_extension: ".csv".to_string(),
            redirect_delay_ms: 1000,
            reload_after_start_ms: 2000,
            reload_after_cancel_ms: 1500,
            notification_ttl_ms: 5000,
            auto_refresh_ms: 30000,
        }
    }
}

impl EnhancementsConfig {
    /// Load configuration from an optional page-provided JSON override
    ///
    /// Missing or blank override falls back to defaults; fields absent in the
    /// override keep their default values.
    pub fn from_override(json: Option<&str>) -> anyhow::Result<Self> {
        match json.map(str::trim) {
            Some(text) if !text.is_empty() => {
                let config: EnhancementsConfig = serde_json::from_str(text)?;
                config.validate()?;
                Ok(config)
            }
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        let csv = &self.csv_import;
        if csv.max_file_bytes == 0 {
            anyhow::bail!("csv_import.max_file_bytes must be positive");
        }
        if !csv.expected_extension.starts_with('.') {
            anyhow::bail!(
                "csv_import.expected_extension must start with '.', got {:?}",
                csv.expected_extension
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_override() {
        let config = EnhancementsConfig::from_override(None).unwrap();
        assert_eq!(config, EnhancementsConfig::default());
        assert_eq!(config.csv_import.max_file_bytes, 52_428_800);
        assert_eq!(config.category_editor.listing_url, "/admin/shop/category/");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = EnhancementsConfig::from_override(Some("  \n ")).unwrap();
        assert_eq!(config, EnhancementsConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let json = r#"{"csv_import": {"auto_refresh_ms": 10000}}"#;
        let config = EnhancementsConfig::from_override(Some(json)).unwrap();
        assert_eq!(config.csv_import.auto_refresh_ms, 10000);
        assert_eq!(config.csv_import.redirect_delay_ms, 1000);
        assert_eq!(config.category_editor, CategoryEditorConfig::default());
    }

    #[test]
    fn test_invalid_override_is_error() {
        assert!(EnhancementsConfig::from_override(Some("{not json")).is_err());
        let bad_ext = r#"{"csv_import": {"expected_extension": "csv"}}"#;
        assert!(EnhancementsConfig::from_override(Some(bad_ext)).is_err());
    }
}
