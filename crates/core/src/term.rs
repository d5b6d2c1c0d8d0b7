//! Academic term model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three academic terms in a school year.
///
/// Fee expectations and transactions are always tracked against a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// First term of the academic year.
    #[serde(rename = "Term 1")]
    Term1,
    /// Second term of the academic year.
    #[serde(rename = "Term 2")]
    Term2,
    /// Third term of the academic year.
    #[serde(rename = "Term 3")]
    Term3,
}

impl Term {
    /// All terms in academic order.
    pub const ALL: [Self; 3] = [Self::Term1, Self::Term2, Self::Term3];

    /// Term number within the year (1-3).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Term1 => 1,
            Self::Term2 => 2,
            Self::Term3 => 3,
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Term1 => write!(f, "Term 1"),
            Self::Term2 => write!(f, "Term 2"),
            Self::Term3 => write!(f, "Term 3"),
        }
    }
}

/// Error returned when a string does not name a valid term.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown term: {0:?}")]
pub struct ParseTermError(pub String);

impl std::str::FromStr for Term {
    type Err = ParseTermError;

    /// Parses the canonical term labels only.
    ///
    /// Matching is strict: no case folding, no whitespace trimming. A label that
    /// drifted from the canonical form is a data-entry error the caller must
    /// surface, not something to paper over here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Term 1" => Ok(Self::Term1),
            "Term 2" => Ok(Self::Term2),
            "Term 3" => Ok(Self::Term3),
            other => Err(ParseTermError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("Term 1", Term::Term1)]
    #[case("Term 2", Term::Term2)]
    #[case("Term 3", Term::Term3)]
    fn test_parse_canonical_labels(#[case] input: &str, #[case] expected: Term) {
        assert_eq!(Term::from_str(input).unwrap(), expected);
    }

    #[rstest]
    #[case("term 1")]
    #[case("TERM 1")]
    #[case(" Term 1")]
    #[case("Term 1 ")]
    #[case("Term1")]
    #[case("Term 4")]
    #[case("")]
    fn test_parse_is_strict(#[case] input: &str) {
        assert!(Term::from_str(input).is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for term in Term::ALL {
            assert_eq!(Term::from_str(&term.to_string()).unwrap(), term);
        }
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&Term::Term2).unwrap();
        assert_eq!(json, "\"Term 2\"");
        let parsed: Term = serde_json::from_str("\"Term 3\"").unwrap();
        assert_eq!(parsed, Term::Term3);
    }

    #[test]
    fn test_all_is_ordered() {
        let numbers: Vec<u8> = Term::ALL.iter().map(|t| t.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
