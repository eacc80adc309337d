//! # Customer Registry
//!
//! Registered customers in registration order. Duplicate ids and names are
//! kept as separate entries; nothing is ever removed or edited.

use std::slice;

use tracing::debug;

use crate::types::Customer;

#[derive(Debug, Clone, Default)]
pub struct CustomerRegistry {
    customers: Vec<Customer>,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unconditionally.
    pub fn register(&mut self, customer: Customer) {
        debug!(id = customer.id, name = %customer.name, "Customer registered");
        self.customers.push(customer);
    }

    /// All customers, oldest registration first.
    ///
    /// The iterator is `Clone`, so a listing can be walked again without
    /// going back to the registry.
    pub fn list_all(&self) -> slice::Iter<'_, Customer> {
        self.customers.iter()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
