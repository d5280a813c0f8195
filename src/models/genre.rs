use serde::{Deserialize, Serialize};

/// A genre movies and shows can be filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
    pub slug: String,
}
