//! Async MyAnimeList API v2 client built on `shiori-core`.
//!
//! ```no_run
//! # async fn run() -> Result<(), shiori_api::ApiError> {
//! let client = shiori_api::Client::with_client_id("your-client-id")?;
//! let result = client.anime().search_anime("frieren", Some(5), 0).await;
//! if let Some(anime) = result.value() {
//!     println!("{} results", anime.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod services;

pub use client::Client;
pub use config::{ClientConfig, Credentials};
pub use error::ApiError;
pub use http::HttpService;
pub use services::{
    AnimeListPatch, AnimeService, ApiOutcome, ForumService, MangaListPatch, MangaService,
    TopicQuery, UserService,
};

pub use shiori_core::{models, vocabulary, Outcome};
