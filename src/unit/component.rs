//! Installed chassis components

use serde::{Deserialize, Serialize};

use crate::core::types::ChassisLocation;

/// A component installed on a unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Display name
    pub name: String,
    /// Where it is mounted
    pub location: ChassisLocation,
    /// False once destroyed or disabled by damage
    #[serde(default = "default_functional")]
    pub functional: bool,
    /// Category ids the component belongs to
    #[serde(default)]
    pub categories: Vec<String>,
}

fn default_functional() -> bool {
    true
}

impl Component {
    /// Create a functional component with a single category
    pub fn new(
        name: impl Into<String>,
        location: ChassisLocation,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            functional: true,
            categories: vec![category.into()],
        }
    }

    /// Mark the component destroyed
    pub fn destroyed(mut self) -> Self {
        self.functional = false;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    pub fn is_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}
