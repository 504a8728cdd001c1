use serde::{Deserialize, Serialize};

/// A selection that is either one of the department's listed values or
/// free text typed by the user.
///
/// In a plan file a literal is a plain string, free text is a map:
///
/// ```yaml
/// activity: Street Sweeping
/// tools:
///   custom: Rakes and gloves
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choice {
    Literal(String),
    Custom { custom: String },
}

impl Choice {
    pub fn literal(value: impl Into<String>) -> Self {
        Choice::Literal(value.into())
    }

    pub fn custom(text: impl Into<String>) -> Self {
        Choice::Custom {
            custom: text.into(),
        }
    }

    /// The text that ends up in the report.
    pub fn resolve(&self) -> &str {
        match self {
            Choice::Literal(v) => v,
            Choice::Custom { custom } => custom,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Choice::Custom { .. })
    }
}

/// Resolved text of an optional choice, empty when nothing was selected.
pub fn resolve_opt(choice: &Option<Choice>) -> &str {
    choice.as_ref().map(Choice::resolve).unwrap_or("")
}
