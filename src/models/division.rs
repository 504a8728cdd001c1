use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Administrative zone the crew reports to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Division {
    Central,
    Kawempe,
    Makindye,
    Nakawa,
    Rubaga,
}

impl Division {
    pub const ALL: [Division; 5] = [
        Division::Central,
        Division::Kawempe,
        Division::Makindye,
        Division::Nakawa,
        Division::Rubaga,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Division::Central => "Central",
            Division::Kawempe => "Kawempe",
            Division::Makindye => "Makindye",
            Division::Nakawa => "Nakawa",
            Division::Rubaga => "Rubaga",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive lookup by name (CLI input).
impl FromStr for Division {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Division::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::UnknownDivision(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("kawempe".parse::<Division>().unwrap(), Division::Kawempe);
        assert_eq!(" NAKAWA ".parse::<Division>().unwrap(), Division::Nakawa);
    }

    #[test]
    fn rejects_unknown_division() {
        assert!(matches!(
            "Entebbe".parse::<Division>(),
            Err(AppError::UnknownDivision(_))
        ));
    }
}
