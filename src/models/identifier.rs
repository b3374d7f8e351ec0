use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::SnklogError;
use crate::models::Category;

/// Short handle for a log file, e.g. `S1` for the newest Slurm log.
///
/// The ordinal is kept as parsed; whether it falls inside the current listing
/// is only known when the catalog resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier {
    pub category: Category,
    pub ordinal: i64,
}

impl Identifier {
    pub fn new(category: Category, ordinal: i64) -> Self {
        Self { category, ordinal }
    }
}

impl FromStr for Identifier {
    type Err = SnklogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let category = chars
            .next()
            .and_then(Category::from_tag)
            .ok_or_else(|| SnklogError::InvalidCategory(s.to_string()))?;

        let ordinal = chars
            .as_str()
            .trim()
            .parse::<i64>()
            .or_else(|e| match e.kind() {
                // too large to index anything; let resolution report the range
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(SnklogError::InvalidFormat(s.to_string())),
            })?;

        Ok(Self { category, ordinal })
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.category.tag(), self.ordinal)
    }
}
