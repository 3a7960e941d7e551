use contracts::usecases::u508_import_csv::FileInfo;
use leptos::prelude::*;

/// Ссылка на страницу загрузки, добавляется в панель списка
#[component]
pub fn UploadLink(href: String) -> impl IntoView {
    view! {
        <a href=href class="addlink" style="margin-left: 10px;">
            "Загрузить CSV файл"
        </a>
    }
}

/// Панель с данными выбранного файла; новая выборка заменяет прежнюю
#[component]
pub fn FileInfoPanel(info: RwSignal<Option<FileInfo>>) -> impl IntoView {
    move || {
        info.get().map(|file| {
            let size = file.size_label();
            let mime = file.type_label().to_string();
            view! {
                <div
                    class="file-info"
                    style="margin-top: 10px; padding: 10px; background: #e7f3ff; border: 1px solid #b8daff; border-radius: 4px; color: #0056b3;"
                >
                    <strong>"✅ Файл готов к загрузке:"</strong>
                    <br />
                    "📄 Название: "
                    {file.name}
                    <br />
                    "📊 Размер: "
                    {size}
                    <br />
                    "🔧 Тип: "
                    {mime}
                </div>
            }
        })
    }
}
