//! Typed core of the shiori MyAnimeList client.
//!
//! Everything here is synchronous and network-free: the closed vocabularies,
//! the domain model, route templates, the [`Outcome`] return type, and the
//! serializer that turns decoded JSON into the domain model.

pub mod error;
pub mod models;
pub mod outcome;
pub mod route;
pub mod serializer;
pub mod vocabulary;

pub use error::CoreError;
pub use outcome::Outcome;
pub use route::{RequestBuilder, Route, PLACEHOLDER};
pub use vocabulary::{Vocabulary, Wire};
