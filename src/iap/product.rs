use std::fmt;

use serde::{Deserialize, Serialize};

/// Simplified in-app purchase product, held only for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// The single product the simulated store sells.
    pub fn remove_ads() -> Self {
        Self {
            id: "1007".to_string(),
            name: "Remove Ads".to_string(),
            price: 3.99,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${}", self.name, self.price)
    }
}
