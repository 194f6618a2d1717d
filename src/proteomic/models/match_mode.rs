use std::fmt;
use std::str::FromStr;

use crate::proteomic::error::MatchError;

/// Matching policy applied to every query of a batch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatchMode {
    /// query and database sequence are identical
    Exact,
    /// database sequence occurs somewhere inside the query
    Fragment
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        return match self {
            MatchMode::Exact => "exact",
            MatchMode::Fragment => "fragment"
        }
    }
}

impl FromStr for MatchMode {
    type Err = MatchError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        return match mode.trim().to_lowercase().as_str() {
            "exact" => Ok(MatchMode::Exact),
            "fragment" => Ok(MatchMode::Fragment),
            _ => Err(MatchError::InvalidArgument(format!("unknown match mode '{}', use 'exact' or 'fragment'", mode)))
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
