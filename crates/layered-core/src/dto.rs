//! DTO contracts

/// A data-transfer object with the same identity as its source entity.
///
/// The localization helper uses the key to pair entities with the DTOs
/// produced from them.
pub trait BaseDto {
    /// Identifier type; matches the source entity's `OriginEntity::Key`.
    type Key;

    /// The DTO's identifier.
    fn id(&self) -> Self::Key;
}
