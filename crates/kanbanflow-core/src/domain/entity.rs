//! Domain Layer - Core Entity Trait
//!
//! Every record the backend owns is addressed by a numeric id.

/// Core trait for backend-owned records
pub trait Entity: Clone {
    /// Returns the record's server-assigned identifier
    fn id(&self) -> u32;
}

/// Find a record by id in a cached list
pub fn find_by_id<E: Entity>(records: &[E], id: u32) -> Option<&E> {
    records.iter().find(|record| record.id() == id)
}

/// Find a record by id for in-place mutation
pub fn find_by_id_mut<E: Entity>(records: &mut [E], id: u32) -> Option<&mut E> {
    records.iter_mut().find(|record| record.id() == id)
}
