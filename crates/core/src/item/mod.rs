mod error;
mod http_mapping;
mod operations;
mod requests;
mod types;

pub use error::{
    ItemError, ITEM_NOT_FOUND, MISSING_BODY, MISSING_KEYS, MISSING_LANGUAGE, MISSING_PK,
    MISSING_PK_OR_SK,
};
pub use http_mapping::item_error_to_status_code;
pub use operations::{non_empty_param, project_items, require_keys, require_language, require_pk};
pub use requests::{parse_body, CreateItemRequest, UpdateItemRequest};
pub use types::{Item, ItemUpdate, ItemView, MessageBody, TranslationView};
