//! Identifier generation

use uuid::Uuid;

/// Source of candidate record identifiers
///
/// Uniqueness against stored records is enforced by
/// [`Records::next_id`](super::store::Records::next_id); generators only need
/// to make collisions unlikely.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random 32-character lowercase hex identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
