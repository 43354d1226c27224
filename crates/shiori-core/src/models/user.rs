use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::anime::Anime;
use super::manga::Manga;
use crate::vocabulary::{
    AnimeRewatchValue, AnimeWatchStatus, ListPriority, MangaReadStatus, MangaRereadValue,
};

// ── Anime list ──────────────────────────────────────────────────

/// An anime's status in a user's list. Counters default to `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimeListStatus {
    pub status: AnimeWatchStatus,
    pub score: u8,
    pub num_episodes_watched: u32,
    pub is_rewatching: bool,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimeListEntry {
    pub anime: Anime,
    pub list_status: AnimeListStatus,
}

/// The list status echoed back by an anime list update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimeListUpdate {
    pub status: Option<AnimeWatchStatus>,
    pub score: u8,
    pub num_episodes_watched: u32,
    pub is_rewatching: bool,
    pub priority: ListPriority,
    pub num_times_rewatched: u32,
    pub rewatch_value: Option<AnimeRewatchValue>,
    pub tags: Vec<String>,
    pub comments: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub updated_at: Option<DateTime<Utc>>,
}

// ── Manga list ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MangaListStatus {
    pub status: MangaReadStatus,
    pub score: u8,
    pub num_volumes_read: u32,
    pub num_chapters_read: u32,
    pub is_rereading: bool,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MangaListEntry {
    pub manga: Manga,
    pub list_status: MangaListStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MangaListUpdate {
    pub status: Option<MangaReadStatus>,
    pub score: u8,
    pub num_volumes_read: u32,
    pub num_chapters_read: u32,
    pub is_rereading: bool,
    pub priority: ListPriority,
    pub num_times_reread: u32,
    pub reread_value: Option<MangaRereadValue>,
    pub tags: Vec<String>,
    pub comments: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub updated_at: Option<DateTime<Utc>>,
}
