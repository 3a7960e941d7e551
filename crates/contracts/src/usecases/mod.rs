pub mod common;
pub mod u508_import_csv;
