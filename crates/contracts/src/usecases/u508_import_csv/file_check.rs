use crate::shared::config::CsvImportConfig;
use thiserror::Error;

pub const FILE_ACCEPTED_MESSAGE: &str =
    "Файл выбран успешно! Теперь нажмите \"Загрузить файл\"";

const BYTES_IN_MB: f64 = 1024.0 * 1024.0;

/// Файл, выбранный в `<input type="file">`
#[derive(Debug, Clone, PartialEq)]
pub struct FileCandidate {
    pub name: String,
    pub size: u64,
    /// Заявленный браузером MIME-тип, может быть пустым
    pub mime: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("Файл слишком большой. Максимальный размер: {limit}MB")]
    TooLarge { size: u64, limit: String },
    #[error("Пожалуйста, выберите файл с расширением {extension}")]
    WrongExtension { extension: String },
}

/// Сведения о принятом файле для панели подтверждения
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl FileInfo {
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / BYTES_IN_MB)
    }

    pub fn type_label(&self) -> &str {
        if self.mime.trim().is_empty() {
            "text/csv"
        } else {
            &self.mime
        }
    }
}

/// Предел в мегабайтах: целое число без дробной части, иначе два знака
fn limit_label(bytes: u64) -> String {
    let megabytes = bytes as f64 / BYTES_IN_MB;
    if megabytes.fract() == 0.0 {
        format!("{}", megabytes as u64)
    } else {
        format!("{:.2}", megabytes)
    }
}

/// Проверка размера (первой) и расширения выбранного файла
pub fn check_file(
    candidate: FileCandidate,
    config: &CsvImportConfig,
) -> Result<FileInfo, FileRejection> {
    if candidate.size > config.max_file_bytes {
        return Err(FileRejection::TooLarge {
            size: candidate.size,
            limit: limit_label(config.max_file_bytes),
        });
    }

    let extension = config.expected_extension.to_lowercase();
    if !candidate.name.to_lowercase().ends_with(&extension) {
        return Err(FileRejection::WrongExtension {
            extension: config.expected_extension.clone(),
        });
    }

    Ok(FileInfo {
        name: candidate.name,
        size: candidate.size,
        mime: candidate.mime,
    })
}
