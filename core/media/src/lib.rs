#![recursion_limit = "512"]

//! Immutable Internet media types (MIME types) as described by RFC 2045 and
//! RFC 2046: a type, a subtype, and an ordered, multi-valued set of
//! `attribute=value` parameters.
//!
//! The central type is [`MediaType`]. Values are parsed from strings or
//! built from parts, normalized on the way in, and never modified
//! afterwards; every "modifier" method returns a new value. A library of
//! well-known media types lives in [`known`], and parsing or constructing a
//! value equal to one of them yields that very instance.
//!
//! ```rust
//! use media_type::{MediaType, known};
//!
//! let json: MediaType = "Application/JSON; Charset=\"UTF-8\"".parse().unwrap();
//! assert!(MediaType::ptr_eq(&json, &known::JSON_UTF_8));
//! assert_eq!(json.to_string(), "application/json; charset=utf-8");
//! assert_eq!(json.charset(), Ok(Some(encoding_rs::UTF_8)));
//!
//! let ranged = json.is(&known::ANY_APPLICATION_TYPE);
//! assert!(ranged);
//! ```
//!
//! ## Features
//!
//! | Feature | Description                                          |
//! |---------|------------------------------------------------------|
//! | `serde` | `Serialize` and `Deserialize` for [`MediaType`] as a string. |
//!
//! ## Logging
//!
//! Diagnostics are emitted at the `trace` level through the [`log`] facade
//! and are only visible if the application installs a logger.

#[macro_use]
mod known_media_types;

pub mod charset;
pub mod error;
pub mod known;
pub mod parse;

mod media_type;
mod params;

#[cfg(feature = "serde")]
mod serde;

#[doc(inline)]
pub use crate::media_type::MediaType;
#[doc(inline)]
pub use crate::params::{Iter, MediaParams};
