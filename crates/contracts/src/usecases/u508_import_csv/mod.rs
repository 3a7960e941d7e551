pub mod action;
pub mod control;
pub mod file_check;
pub mod response;

pub use action::ImportAction;
pub use control::{ControlAppearance, ControlState, ImportFileStatus, TransitionError};
pub use file_check::{check_file, FileCandidate, FileInfo, FileRejection};
pub use response::{AfterSuccess, ImportActionResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct ImportCsv;

impl UseCaseMetadata for ImportCsv {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "import_csv"
    }

    fn display_name() -> &'static str {
        "Импорт товаров из CSV"
    }

    fn description() -> &'static str {
        "Загрузка CSV-файла 1С, запуск и отмена фонового импорта"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_names() {
        assert_eq!(ImportCsv::full_name(), "u508_import_csv");
        assert!(!ImportCsv::description().is_empty());
    }
}
