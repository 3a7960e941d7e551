pub mod domain;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

/// Точка входа: подключает оба улучшения страницы админки
#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = shared::config::load_page_config();

    domain::a025_category::ui::editor::mount(config.category_editor.clone());
    usecases::u508_import_csv::mount(config.csv_import);
}

/// Вызывается владельцем списка категорий после его перерисовки
#[wasm_bindgen]
pub fn category_list_rendered() {
    domain::a025_category::ui::editor::rebind_triggers();
}

/// Вызывается владельцем списка файлов импорта после его перерисовки
#[wasm_bindgen]
pub fn import_list_rendered() {
    usecases::u508_import_csv::rebind_controls();
}
