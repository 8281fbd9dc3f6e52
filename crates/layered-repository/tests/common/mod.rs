//! Shared test fixtures: a soft-deletable entity, an origin entity, and
//! DTOs with localization tables.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use layered_core::{
    BaseDto, BaseEntity, HasDelete, HasLang, LocalizedSource, LocalizedTarget, MapFrom,
    OriginEntity,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub title_en: Option<String>,
    pub title_az: Option<String>,
    pub lang: Option<String>,
    pub pages: u32,
    pub is_deleted: bool,
    pub created_date: Option<DateTime<Utc>>,
    pub updated_date: Option<DateTime<Utc>>,
}

impl Book {
    pub fn new(id: u64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            title_en: None,
            title_az: None,
            lang: None,
            pages: 100,
            is_deleted: false,
            created_date: None,
            updated_date: None,
        }
    }

    pub fn with_lang(id: u64, title: &str, lang: &str) -> Self {
        let mut book = Self::new(id, title);
        book.lang = Some(lang.to_string());
        book
    }
}

impl OriginEntity for Book {
    type Key = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

impl HasDelete for Book {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }
}

impl BaseEntity for Book {
    fn created_date(&self) -> Option<DateTime<Utc>> {
        self.created_date
    }

    fn set_created_date(&mut self, date: DateTime<Utc>) {
        self.created_date = Some(date);
    }

    fn updated_date(&self) -> Option<DateTime<Utc>> {
        self.updated_date
    }

    fn set_updated_date(&mut self, date: DateTime<Utc>) {
        self.updated_date = Some(date);
    }
}

impl HasLang for Book {
    fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    fn set_lang(&mut self, lang: Option<String>) {
        self.lang = lang;
    }
}

impl LocalizedSource for Book {
    fn localized_bases() -> &'static [&'static str] {
        &["title"]
    }

    fn localized_field(&self, base: &str, language: &str) -> Option<String> {
        match (base, language) {
            ("title", "en") => self.title_en.clone(),
            ("title", "az") => self.title_az.clone(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookDto {
    pub id: u64,
    pub title: String,
}

impl BaseDto for BookDto {
    type Key = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

impl MapFrom<Book> for BookDto {
    fn map_from(entity: &Book) -> Self {
        Self {
            id: entity.id,
            title: entity.title.clone(),
        }
    }
}

impl LocalizedTarget for BookDto {
    fn set_localized_field(&mut self, base: &str, value: String) -> bool {
        match base {
            "title" => {
                self.title = value;
                true
            }
            _ => false,
        }
    }
}

/// Origin entity without audit columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: u32,
    pub label: String,
}

impl Tag {
    pub fn new(id: u32, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
        }
    }
}

impl OriginEntity for Tag {
    type Key = u32;

    fn id(&self) -> u32 {
        self.id
    }
}
