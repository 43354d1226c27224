use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::common::{AlternativeTitles, NamedRef, Picture, Ranking, Recommendation, RelatedMedia};
use crate::vocabulary::{MangaStatus, MangaType, NsfwLevel};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthorName {
    pub id: Option<u64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Author {
    pub node: AuthorName,
    /// e.g. `Story & Art`.
    pub role: Option<String>,
}

/// Every field a manga can carry.
///
/// Same absent-value conventions as [`Anime`](super::Anime); `num_volumes`
/// and `num_chapters` default to `0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manga {
    pub id: u64,
    pub title: String,
    pub main_picture: Picture,
    pub alternative_titles: AlternativeTitles,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub synopsis: Option<String>,
    pub mean: Option<f64>,
    pub rank: Option<u32>,
    pub popularity: Option<u32>,
    pub num_list_users: Option<u64>,
    pub num_scoring_users: Option<u64>,
    pub nsfw: NsfwLevel,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub media_type: MangaType,
    pub status: Option<MangaStatus>,
    pub genres: Vec<NamedRef>,
    pub num_volumes: u32,
    pub num_chapters: u32,
    pub authors: Vec<Author>,
    pub pictures: Vec<Picture>,
    pub background: Option<String>,
    pub related_anime: Vec<RelatedMedia>,
    pub related_manga: Vec<RelatedMedia>,
    pub recommendations: Vec<Recommendation>,
    /// Magazines the manga was serialized in.
    pub serialization: Vec<NamedRef>,
}

pub type MangaRanking = Ranking<Manga>;
