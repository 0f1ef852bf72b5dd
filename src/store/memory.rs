use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::{IdSequence, ProductLookup};
use crate::core::{Product, RegisterError, ValidationError};

/// Map-backed product store with sequential id generation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProducts {
    entries: BTreeMap<u64, Arc<Product>>,
    ids: IdSequence,
}

impl InMemoryProducts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(product: &Product) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if product.code.trim().is_empty() {
        errors.push(ValidationError::new("product.code", "code must not be empty"));
    }
    if product.name.trim().is_empty() {
        errors.push(ValidationError::new("product.name", "name must not be empty"));
    }
    if product.price < Decimal::ZERO {
        errors.push(ValidationError::new(
            "product.price",
            "price must be non-negative",
        ));
    }
    errors
}

impl ProductLookup for InMemoryProducts {
    fn find_by_id(&self, id: u64) -> Result<Arc<Product>, RegisterError> {
        self.entries
            .get(&id)
            .cloned()
            .ok_or(RegisterError::NotFound {
                entity: "product",
                id,
            })
    }

    fn find_all(&self) -> Vec<Arc<Product>> {
        self.entries.values().cloned().collect()
    }

    fn create(
        &mut self,
        mut product: Product,
        generate_id: bool,
    ) -> Result<Arc<Product>, RegisterError> {
        let errors = validate(&product);
        if !errors.is_empty() {
            return Err(RegisterError::invalid_entity(errors));
        }

        let id = if generate_id {
            self.ids.next_id()
        } else {
            let id = product.id.ok_or_else(|| {
                RegisterError::InvalidEntity("product.id: id is required when not generated".into())
            })?;
            if self.entries.contains_key(&id) {
                return Err(RegisterError::InvalidEntity(format!(
                    "product.id: id {id} already exists"
                )));
            }
            self.ids.advance_past(id);
            id
        };

        product.id = Some(id);
        let stored = Arc::new(product);
        self.entries.insert(id, Arc::clone(&stored));
        Ok(stored)
    }

    fn delete_all(&mut self) {
        self.entries.clear();
    }
}
