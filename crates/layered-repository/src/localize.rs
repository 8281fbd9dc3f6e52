//! DTO localization helper
//!
//! Copies language-suffixed entity fields onto the matching plain fields
//! of a DTO. The entity declares its localized field table through
//! [`LocalizedSource`]; the DTO accepts writes through
//! [`LocalizedTarget`]. Fields the DTO does not have, and languages the
//! entity does not carry, are skipped silently.

use layered_core::{BaseDto, LocalizedSource, LocalizedTarget, OriginEntity};

/// Localize one DTO from its source entity.
///
/// For every base name in the entity's field table, the value of
/// `<base>_<language>` (when present) is written onto the DTO's `<base>`
/// field. The DTO is returned for call chaining.
///
/// # Example
///
/// ```
/// use layered_core::{LocalizedSource, LocalizedTarget};
/// use layered_repository::localize::get_localized;
///
/// struct Article { title_en: Option<String>, title_az: Option<String> }
/// #[derive(Default)]
/// struct ArticleDto { title: String }
///
/// impl LocalizedSource for Article {
///     fn localized_bases() -> &'static [&'static str] {
///         &["title"]
///     }
///     fn localized_field(&self, base: &str, language: &str) -> Option<String> {
///         match (base, language) {
///             ("title", "en") => self.title_en.clone(),
///             ("title", "az") => self.title_az.clone(),
///             _ => None,
///         }
///     }
/// }
///
/// impl LocalizedTarget for ArticleDto {
///     fn set_localized_field(&mut self, base: &str, value: String) -> bool {
///         match base {
///             "title" => {
///                 self.title = value;
///                 true
///             }
///             _ => false,
///         }
///     }
/// }
///
/// let article = Article { title_en: Some("Hi".into()), title_az: None };
/// let mut dto = ArticleDto::default();
/// get_localized(&article, &mut dto, "en");
/// assert_eq!(dto.title, "Hi");
/// ```
pub fn get_localized<'a, E, D>(entity: &E, dto: &'a mut D, language: &str) -> &'a mut D
where
    E: LocalizedSource,
    D: LocalizedTarget,
{
    for base in E::localized_bases() {
        if let Some(value) = entity.localized_field(base, language) {
            dto.set_localized_field(base, value);
        }
    }
    dto
}

/// Localize a list of DTOs, pairing each entity with the DTO carrying the
/// same identifier. Entities with no matching DTO are skipped.
pub fn get_localized_list<E, D>(entities: &[E], dtos: &mut [D], language: &str)
where
    E: OriginEntity + LocalizedSource,
    D: BaseDto<Key = E::Key> + LocalizedTarget,
{
    for entity in entities {
        if let Some(dto) = dtos.iter_mut().find(|d| d.id() == entity.id()) {
            get_localized(entity, dto, language);
        }
    }
}
