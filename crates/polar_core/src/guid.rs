use std::fmt;

use uuid::Uuid;

use crate::error::CoreError;

pub const GUID_LEN: usize = 32;

/// Unity asset GUID: 32 lowercase hex digits, no separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetGuid(String);

impl AssetGuid {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let valid = text.len() == GUID_LEN
            && text
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !valid {
            return Err(CoreError::malformed(format!(
                "'{text}' is not a {GUID_LEN}-digit lowercase hex GUID"
            )));
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
