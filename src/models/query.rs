//! User-supplied lookup identifier.

use super::{PokedexError, Result};
use std::fmt;

/// A trimmed, non-empty identifier (name or numeric id).
///
/// Case is preserved; the service decides what it matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Trim `raw` and reject it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PokedexError::InvalidInput(
                "identifier must not be blank".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let query = Query::parse("  Gengar \n").unwrap();
        assert_eq!(query.as_str(), "Gengar");
        assert_eq!(query.to_string(), "Gengar");
    }

    #[test]
    fn test_blank_is_invalid_input() {
        for raw in ["", "   ", "\t\n"] {
            assert!(matches!(
                Query::parse(raw),
                Err(PokedexError::InvalidInput(_))
            ));
        }
    }
}
