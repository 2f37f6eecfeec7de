use serde::Serialize;

use bizrecords_core::{DomainError, DomainResult, Entity};

use crate::product::Product;

/// What [`InventoryStore::add`] did with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    /// A new product record was created with the given quantity and price.
    Created,
    /// The product existed; quantity was increased and the price left as is.
    Restocked { quantity: u64 },
}

/// In-memory product store keyed by name, listed in insertion order.
///
/// Each check-then-act (`add`, `mark_damaged`) runs under `&mut self`, so no
/// other operation can interleave between the check and the mutation.
#[derive(Debug, Default, Clone)]
pub struct InventoryStore {
    products: Vec<Product>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add stock. On a repeat add only the quantity changes; the new price is ignored.
    ///
    /// The stored quantity saturates at `u64::MAX`: units that would push it
    /// past that are dropped, and the returned `Restocked` quantity is the cap.
    pub fn add(&mut self, name: impl Into<String>, quantity: u64, price_per_unit: u64) -> AddOutcome {
        let name = name.into();
        match self.find_mut(&name) {
            Some(product) => {
                product.restock(quantity);
                tracing::info!(
                    product = %name,
                    added = quantity,
                    quantity = product.quantity(),
                    "product already exists; quantity updated"
                );
                AddOutcome::Restocked {
                    quantity: product.quantity(),
                }
            }
            None => {
                tracing::debug!(product = %name, quantity, price_per_unit, "product added");
                self.products.push(Product::new(name, quantity, price_per_unit));
                AddOutcome::Created
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> DomainResult<Product> {
        match self.position(name) {
            Some(idx) => {
                tracing::debug!(product = %name, "product removed");
                Ok(self.products.remove(idx))
            }
            None => {
                tracing::warn!(product = %name, "product not found");
                Err(DomainError::not_found(name))
            }
        }
    }

    /// Write off damaged units, returning the remaining quantity.
    ///
    /// Rejected whole (quantity unchanged) when the product is unknown or holds
    /// fewer than `quantity` units; an unknown product reports zero available.
    pub fn mark_damaged(&mut self, name: &str, quantity: u64) -> DomainResult<u64> {
        let Some(product) = self.find_mut(name) else {
            tracing::warn!(product = %name, requested = quantity, "insufficient quantity");
            return Err(DomainError::insufficient(name, quantity, 0));
        };

        let available = product.quantity();
        match product.try_withdraw(quantity) {
            Some(remaining) => {
                tracing::info!(product = %name, damaged = quantity, remaining, "units marked as damaged");
                Ok(remaining)
            }
            None => {
                tracing::warn!(product = %name, requested = quantity, available, "insufficient quantity");
                Err(DomainError::insufficient(name, quantity, available))
            }
        }
    }

    pub fn list_inventory(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id() == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == name)
    }
}
