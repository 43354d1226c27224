use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use super::common::{AlternativeTitles, NamedRef, Picture, Ranking, Recommendation, RelatedMedia};
use crate::vocabulary::{AnimeSeason, AnimeStatus, AnimeType, NsfwLevel};

/// The season an anime started airing in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Season {
    pub year: Option<u32>,
    pub season: Option<AnimeSeason>,
}

/// Weekly broadcast slot (JST).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Broadcast {
    pub day_of_the_week: Option<String>,
    pub start_time: Option<NaiveTime>,
}

/// Number of users per list status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub watching: Option<u64>,
    pub completed: Option<u64>,
    pub on_hold: Option<u64>,
    pub dropped: Option<u64>,
    pub plan_to_watch: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnimeStatistics {
    pub status: StatusCounts,
    /// Total number of users with the anime in their list.
    pub num_list_users: Option<u64>,
}

/// Every field an anime can carry.
///
/// Scalars the API omitted are `None` and collections are empty, with two
/// exceptions: `num_episodes` and `average_episode_duration` default to `0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anime {
    pub id: u64,
    pub title: String,
    pub main_picture: Picture,
    pub alternative_titles: AlternativeTitles,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub synopsis: Option<String>,
    /// Mean score on the site.
    pub mean: Option<f64>,
    pub rank: Option<u32>,
    pub popularity: Option<u32>,
    pub num_list_users: Option<u64>,
    pub num_scoring_users: Option<u64>,
    pub nsfw: NsfwLevel,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub media_type: AnimeType,
    pub status: Option<AnimeStatus>,
    pub genres: Vec<NamedRef>,
    pub num_episodes: u32,
    pub start_season: Option<Season>,
    pub broadcast: Option<Broadcast>,
    pub source: Option<String>,
    /// In seconds.
    pub average_episode_duration: u32,
    /// Age rating, e.g. `pg_13`.
    pub rating: Option<String>,
    pub pictures: Vec<Picture>,
    pub background: Option<String>,
    pub related_anime: Vec<RelatedMedia>,
    pub related_manga: Vec<RelatedMedia>,
    pub recommendations: Vec<Recommendation>,
    pub studios: Vec<NamedRef>,
    pub statistics: Option<AnimeStatistics>,
}

pub type AnimeRanking = Ranking<Anime>;
