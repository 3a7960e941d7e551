pub mod config;
pub mod error;
pub mod notification;

pub use config::{CategoryEditorConfig, CsvImportConfig, EnhancementsConfig};
pub use error::{ClientError, ClientResult};
pub use notification::{Notification, NotificationKind, NotificationSlot};
