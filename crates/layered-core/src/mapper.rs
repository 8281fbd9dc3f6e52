//! Entity → DTO projection
//!
//! The projection step is a compile-time trait rather than a runtime
//! mapping component: each DTO states how it is built from its entity, and
//! the repository methods that return DTOs are generic over it.

/// Builds `Self` from a borrowed entity.
///
/// # Example
///
/// ```
/// use layered_core::MapFrom;
///
/// struct User { id: u64, name: String }
/// struct UserDto { id: u64, name: String }
///
/// impl MapFrom<User> for UserDto {
///     fn map_from(entity: &User) -> Self {
///         UserDto { id: entity.id, name: entity.name.clone() }
///     }
/// }
///
/// let user = User { id: 7, name: "arzu".into() };
/// let dto = UserDto::map_from(&user);
/// assert_eq!(dto.id, 7);
/// ```
pub trait MapFrom<E>: Sized {
    fn map_from(entity: &E) -> Self;
}
