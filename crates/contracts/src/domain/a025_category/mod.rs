pub mod aggregate;
pub mod editor;
pub mod listing;

pub use aggregate::{
    CategoryEditState, CategoryFormError, CategoryUpdate, ParentCategoryOption, SaveOutcome,
    UpdateCategoryResponse,
};
pub use editor::{CategoryEditorState, EditTriggerAttributes, ModalState};
pub use listing::{is_top_level, parent_options_from_rows, ListingRow};
