use crate::shared::error::TrimError;
use crate::shared::Result;

/// NewType wrapper for an opaque product identifier
///
/// Codes are compared and hashed byte for byte. Nothing about their
/// structure is assumed; only the empty string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductCode(String);

impl ProductCode {
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();

        if code.is_empty() {
            return Err(TrimError::Validation {
                message: "Product code cannot be empty".to_string(),
            }
            .into());
        }

        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProductCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
