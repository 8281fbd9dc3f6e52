//! Localized field tables
//!
//! The original pattern stores one column per language (`title_en`,
//! `title_az`, ...) on the entity and a single `title` field on the DTO.
//! In a statically-typed setting the lookup is an explicit field table:
//! the entity declares which base names carry language variants and how to
//! read them, the DTO declares how to write a base name back. The
//! localization helper in `layered-repository` walks the table.

/// Source side of localization: an entity with language-suffixed fields.
pub trait LocalizedSource {
    /// Base field names that have `<base>_<language>` variants.
    fn localized_bases() -> &'static [&'static str]
    where
        Self: Sized;

    /// Value of the `<base>_<language>` field, if the entity has one for
    /// this language and it holds a value.
    fn localized_field(&self, base: &str, language: &str) -> Option<String>;
}

/// Target side of localization: a DTO with plain base-named fields.
pub trait LocalizedTarget {
    /// Write `value` onto the `<base>` field. Returns `false` when the DTO
    /// has no such field; the helper skips those silently.
    fn set_localized_field(&mut self, base: &str, value: String) -> bool;
}
