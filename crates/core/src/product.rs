//! The product entity and its visibility rule.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::{DbId, Flag};

/// The public shape of a product.
///
/// `status` and `hide_stock` live only in the store and never leave it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    /// Stored and exposed as a double; no narrowing on read.
    pub price: f64,
    pub game_id: DbId,
}

/// Insert payload used for seeding and fixtures. Not reachable from GraphQL.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    #[validate(
        custom(function = "finite_price", message = "price must be a finite number"),
        range(min = 0.0, message = "price must not be negative")
    )]
    pub price: f64,
    pub game_id: DbId,
    #[serde(default = "default_status")]
    pub status: Flag,
    #[serde(default)]
    pub hide_stock: Flag,
}

fn default_status() -> Flag {
    1
}

/// NaN and infinities have no GraphQL `Float` representation.
fn finite_price(price: f64) -> Result<(), ValidationError> {
    if price.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite_price"))
    }
}

impl NewProduct {
    /// A visible product (`status = 1`, `hide_stock = 0`).
    pub fn visible(name: impl Into<String>, price: f64, game_id: DbId) -> Self {
        Self {
            name: name.into(),
            price,
            game_id,
            status: default_status(),
            hide_stock: 0,
        }
    }

    pub fn with_flags(mut self, status: Flag, hide_stock: Flag) -> Self {
        self.status = status;
        self.hide_stock = hide_stock;
        self
    }
}

/// A product is served only when it is active and its stock is not hidden.
///
/// The SQL in `catalog-db` encodes the same predicate as
/// `prd_status > 0 AND prd_hide_stock = 0`.
pub fn is_visible(status: Flag, hide_stock: Flag) -> bool {
    status > 0 && hide_stock == 0
}
