use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberName(String);

impl MemberName {
    pub fn parse(name: String) -> Result<Self, ValidationError> {
        match name.chars().count() {
            x if x < 1 => Err(ValidationError::new(
                "Member name cannot be empty".to_string(),
            )),
            x if x > 255 => Err(ValidationError::new(
                "Max name length is 255 characters".to_string(),
            )),
            _ => Ok(Self(name)),
        }
    }
}

impl AsRef<String> for MemberName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
