//! Core contracts for the layered data-access stack
//!
//! This crate defines the traits the repository and service layers are
//! generic over:
//!
//! - [`OriginEntity`] / [`BaseEntity`]: identity, audit timestamps and the
//!   soft-delete flag
//! - [`BaseDto`]: identity on the DTO side
//! - [`MapFrom`]: entity → DTO projection
//! - [`LocalizedSource`] / [`LocalizedTarget`]: language-suffixed field
//!   tables used by the localization helper
//!
//! Nothing in this crate touches storage; it is consumed by
//! `layered-repository` and `layered-services`.

pub mod dto;
pub mod entity;
pub mod localize;
pub mod mapper;

pub use dto::BaseDto;
pub use entity::{BaseEntity, HasDelete, HasLang, OriginEntity};
pub use localize::{LocalizedSource, LocalizedTarget};
pub use mapper::MapFrom;
