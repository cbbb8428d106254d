use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct MemberId(i64);

impl MemberId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = id.parse::<i64>().map_err(|e| {
            ValidationError::new(format!("Invalid member ID: {e}"))
        })?;
        if parsed < 1 {
            return Err(ValidationError::new(
                "Member ID must be positive".to_string(),
            ));
        }
        Ok(Self(parsed))
    }

    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl AsRef<i64> for MemberId {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
