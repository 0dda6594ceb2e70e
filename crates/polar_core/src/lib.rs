pub mod document;
pub mod error;
pub mod guid;
pub mod patch;
pub mod schema;
pub mod value;

pub use document::{AssetDocument, AssetField, parse_field_data, resolve_asset_name};
pub use error::{CoreError, CoreErrorCode};
pub use guid::AssetGuid;
pub use patch::{PatchOutcome, patch_asset_text};
pub use schema::{FieldKind, SchemaCategory, TypeSchema};
pub use value::{Color, FieldValue, Number, ObjectRef};
