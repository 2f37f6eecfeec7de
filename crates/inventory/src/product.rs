use serde::{Deserialize, Serialize};

use bizrecords_core::Entity;

/// Record: a stocked product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    quantity: u64,
    /// Price in the smallest currency unit.
    price_per_unit: u64,
}

impl Product {
    pub fn new(name: impl Into<String>, quantity: u64, price_per_unit: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price_per_unit,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn price_per_unit(&self) -> u64 {
        self.price_per_unit
    }

    /// Saturating: never wraps past `u64::MAX`.
    pub(crate) fn restock(&mut self, quantity: u64) {
        self.quantity = self.quantity.saturating_add(quantity);
    }

    /// Take `quantity` units out, or return `None` and leave stock untouched.
    pub(crate) fn try_withdraw(&mut self, quantity: u64) -> Option<u64> {
        let remaining = self.quantity.checked_sub(quantity)?;
        self.quantity = remaining;
        Some(remaining)
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product: {}, Quantity: {}, Price: {}",
            self.name, self.quantity, self.price_per_unit
        )
    }
}
