use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

macro_rules! prefixed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            const PREFIX: &'static str = $prefix;

            /// Generates a fresh, collision-resistant identifier
            pub fn generate() -> Self {
                Self(format!("{}-{}", Self::PREFIX, Uuid::new_v4()))
            }

            /// Returns the string representation
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = crate::error::TaskflowError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let rest = s
                    .strip_prefix(Self::PREFIX)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .unwrap_or("");

                if !rest.is_empty()
                    && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
                {
                    Ok(Self(s.to_string()))
                } else {
                    Err(crate::error::TaskflowError::InvalidId {
                        kind: $kind,
                        value: s.to_string(),
                    })
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

prefixed_id!(
    /// Unique identifier for a board (e.g., board-6f1c…)
    BoardId,
    "board",
    "board"
);

prefixed_id!(
    /// Unique identifier for a list (e.g., list-6f1c…)
    ListId,
    "list",
    "list"
);

prefixed_id!(
    /// Unique identifier for a card, unique across the whole store
    CardId,
    "card",
    "card"
);
