//! Conversion of decoded API payloads into the domain model.
//!
//! Entry points take the raw [`serde_json::Value`] of a response body. Missing
//! optional data never fails a conversion: scalars become `None`, collections
//! become empty, nested objects become all-absent. Only a payload whose
//! top-level shape is wrong (or a media item without `id`/`title`) is an error.

mod fields;

use serde_json::Value;

pub use fields::{parse_clock_time, parse_date, parse_timestamp};

use self::fields::Fields;
use crate::error::CoreError;
use crate::models::{
    AlternativeTitles, Anime, AnimeListEntry, AnimeListStatus, AnimeListUpdate, AnimeRanking,
    AnimeStatistics, Author, AuthorName, Broadcast, Forum, ForumBoard, ForumPost, ForumSubBoard,
    ForumTopic, ForumTopicDetails, Manga, MangaListEntry, MangaListStatus, MangaListUpdate,
    MangaRanking, NamedRef, Picture, PostCreator, Ranking, Recommendation, ReferenceNode,
    RelatedMedia, Season, StatusCounts,
};
use crate::vocabulary::{AnimeType, AnimeWatchStatus, ListPriority, MangaReadStatus, MangaType, NsfwLevel};

// ── Shared sub-converters ───────────────────────────────────────

fn picture(f: Fields<'_>) -> Picture {
    Picture {
        medium: f.string("medium"),
        large: f.string("large"),
    }
}

fn alternative_titles(f: Fields<'_>) -> AlternativeTitles {
    AlternativeTitles {
        synonyms: f.strings("synonyms"),
        en: f.string("en"),
        ja: f.string("ja"),
    }
}

fn named(f: Fields<'_>) -> NamedRef {
    NamedRef {
        id: f.uint("id"),
        name: f.string("name"),
    }
}

fn named_list(f: Fields<'_>, key: &str) -> Vec<NamedRef> {
    f.list(key).map(named).collect()
}

fn pictures(f: Fields<'_>) -> Vec<Picture> {
    f.list("pictures").map(picture).collect()
}

fn reference_node(f: Fields<'_>) -> ReferenceNode {
    ReferenceNode {
        id: f.uint("id"),
        title: f.string("title"),
        main_picture: f.object("main_picture").map(picture),
    }
}

fn related_media(f: Fields<'_>, key: &str) -> Vec<RelatedMedia> {
    f.list(key)
        .map(|item| RelatedMedia {
            node: reference_node(item.nested("node")),
            relation_type: item.string("relation_type"),
            relation_type_formatted: item.string("relation_type_formatted"),
        })
        .collect()
}

fn recommendations(f: Fields<'_>) -> Vec<Recommendation> {
    f.list("recommendations")
        .map(|item| Recommendation {
            node: reference_node(item.nested("node")),
            num_recommendations: item.uint("num_recommendations"),
        })
        .collect()
}

fn nsfw(f: Fields<'_>) -> NsfwLevel {
    f.symbol("nsfw").unwrap_or(NsfwLevel::White)
}

// ── Anime ───────────────────────────────────────────────────────

fn season(f: Fields<'_>) -> Season {
    Season {
        year: f.uint("year"),
        season: f.symbol("season"),
    }
}

fn broadcast(f: Fields<'_>) -> Broadcast {
    Broadcast {
        day_of_the_week: f.string("day_of_the_week"),
        start_time: f.clock_time("start_time"),
    }
}

fn statistics(f: Fields<'_>) -> AnimeStatistics {
    let status = f.nested("status");
    AnimeStatistics {
        status: StatusCounts {
            watching: status.uint("watching"),
            completed: status.uint("completed"),
            on_hold: status.uint("on_hold"),
            dropped: status.uint("dropped"),
            plan_to_watch: status.uint("plan_to_watch"),
        },
        num_list_users: f.uint("num_list_users"),
    }
}

fn anime_fields(f: Fields<'_>) -> Result<Anime, CoreError> {
    Ok(Anime {
        id: f.require_uint("id")?,
        title: f.require_string("title")?,
        main_picture: picture(f.nested("main_picture")),
        alternative_titles: alternative_titles(f.nested("alternative_titles")),
        start_date: f.date("start_date"),
        end_date: f.date("end_date"),
        synopsis: f.string("synopsis"),
        mean: f.float("mean"),
        rank: f.uint("rank"),
        popularity: f.uint("popularity"),
        num_list_users: f.uint("num_list_users"),
        num_scoring_users: f.uint("num_scoring_users"),
        nsfw: nsfw(f),
        created_at: f.timestamp("created_at"),
        updated_at: f.timestamp("updated_at"),
        media_type: f.symbol("media_type").unwrap_or(AnimeType::Unknown),
        status: f.symbol("status"),
        genres: named_list(f, "genres"),
        num_episodes: f.uint("num_episodes").unwrap_or(0),
        start_season: f.object("start_season").map(season),
        broadcast: f.object("broadcast").map(broadcast),
        source: f.string("source"),
        average_episode_duration: f.uint("average_episode_duration").unwrap_or(0),
        rating: f.string("rating"),
        pictures: pictures(f),
        background: f.string("background"),
        related_anime: related_media(f, "related_anime"),
        related_manga: related_media(f, "related_manga"),
        recommendations: recommendations(f),
        studios: named_list(f, "studios"),
        statistics: f.object("statistics").map(statistics),
    })
}

/// Map a single anime object, as returned by `GET /anime/{id}`.
pub fn map_anime(payload: &Value) -> Result<Anime, CoreError> {
    anime_fields(Fields::expect_object(payload, "anime")?)
}

/// Map a `{"data": [{"node": {..}}, ..]}` page into anime, in page order.
///
/// A single item without `id` or `title` rejects the whole page.
pub fn map_anime_page(payload: &Value) -> Result<Vec<Anime>, CoreError> {
    Fields::expect_object(payload, "anime page")?
        .expect_list("data", "anime page")?
        .map(|item| anime_fields(item.nested("node")))
        .collect()
}

/// Map a ranking page whose items carry a sibling `{"ranking": {"rank": N}}`.
///
/// One item missing `id`, `title` or `ranking.rank` rejects the whole page.
pub fn map_anime_ranking(payload: &Value) -> Result<Vec<AnimeRanking>, CoreError> {
    Fields::expect_object(payload, "anime ranking")?
        .expect_list("data", "anime ranking")?
        .map(|item| ranked(item, anime_fields))
        .collect()
}

// ── Manga ───────────────────────────────────────────────────────

fn authors(f: Fields<'_>) -> Vec<Author> {
    f.list("authors")
        .map(|item| {
            let node = item.nested("node");
            Author {
                node: AuthorName {
                    id: node.uint("id"),
                    first_name: node.string("first_name"),
                    last_name: node.string("last_name"),
                },
                role: item.string("role"),
            }
        })
        .collect()
}

fn serialization(f: Fields<'_>) -> Vec<NamedRef> {
    f.list("serialization")
        .map(|item| named(item.nested("node")))
        .collect()
}

fn manga_fields(f: Fields<'_>) -> Result<Manga, CoreError> {
    Ok(Manga {
        id: f.require_uint("id")?,
        title: f.require_string("title")?,
        main_picture: picture(f.nested("main_picture")),
        alternative_titles: alternative_titles(f.nested("alternative_titles")),
        start_date: f.date("start_date"),
        end_date: f.date("end_date"),
        synopsis: f.string("synopsis"),
        mean: f.float("mean"),
        rank: f.uint("rank"),
        popularity: f.uint("popularity"),
        num_list_users: f.uint("num_list_users"),
        num_scoring_users: f.uint("num_scoring_users"),
        nsfw: nsfw(f),
        created_at: f.timestamp("created_at"),
        updated_at: f.timestamp("updated_at"),
        media_type: f.symbol("media_type").unwrap_or(MangaType::Unknown),
        status: f.symbol("status"),
        genres: named_list(f, "genres"),
        num_volumes: f.uint("num_volumes").unwrap_or(0),
        num_chapters: f.uint("num_chapters").unwrap_or(0),
        authors: authors(f),
        pictures: pictures(f),
        background: f.string("background"),
        related_anime: related_media(f, "related_anime"),
        related_manga: related_media(f, "related_manga"),
        recommendations: recommendations(f),
        serialization: serialization(f),
    })
}

/// Map a single manga object, as returned by `GET /manga/{id}`.
pub fn map_manga(payload: &Value) -> Result<Manga, CoreError> {
    manga_fields(Fields::expect_object(payload, "manga")?)
}

/// Same as [`map_anime_page`]: one item without `id` or `title` rejects the
/// whole page.
pub fn map_manga_page(payload: &Value) -> Result<Vec<Manga>, CoreError> {
    Fields::expect_object(payload, "manga page")?
        .expect_list("data", "manga page")?
        .map(|item| manga_fields(item.nested("node")))
        .collect()
}

/// One item missing `id`, `title` or `ranking.rank` rejects the whole page.
pub fn map_manga_ranking(payload: &Value) -> Result<Vec<MangaRanking>, CoreError> {
    Fields::expect_object(payload, "manga ranking")?
        .expect_list("data", "manga ranking")?
        .map(|item| ranked(item, manga_fields))
        .collect()
}

fn ranked<T>(
    item: Fields<'_>,
    map: fn(Fields<'_>) -> Result<T, CoreError>,
) -> Result<Ranking<T>, CoreError> {
    Ok(Ranking {
        item: map(item.nested("node"))?,
        rank: item
            .nested("ranking")
            .uint("rank")
            .ok_or(CoreError::MissingField("ranking.rank"))?,
    })
}

// ── Forum ───────────────────────────────────────────────────────

fn board(f: Fields<'_>) -> ForumBoard {
    ForumBoard {
        id: f.uint("id"),
        title: f.string("title"),
        description: f.string("description"),
        subboards: f
            .list("subboards")
            .map(|sub| ForumSubBoard {
                id: sub.uint("id"),
                title: sub.string("title"),
            })
            .collect(),
    }
}

fn forum(f: Fields<'_>) -> Forum {
    Forum {
        title: f.string("title"),
        boards: f.list("boards").map(board).collect(),
    }
}

fn topic(f: Fields<'_>) -> ForumTopic {
    ForumTopic {
        id: f.uint("id"),
        title: f.string("title"),
        created_at: f.timestamp("created_at"),
        created_by: named(f.nested("created_by")),
        number_of_posts: f.uint("number_of_posts"),
        last_post_created_at: f.timestamp("last_post_created_at"),
        last_post_created_by: named(f.nested("last_post_created_by")),
        is_locked: f.boolean("is_locked"),
    }
}

fn post(f: Fields<'_>) -> ForumPost {
    let creator = f.nested("created_by");
    ForumPost {
        id: f.uint("id"),
        number: f.uint("number"),
        created_at: f.timestamp("created_at"),
        created_by: PostCreator {
            id: creator.uint("id"),
            name: creator.string("name"),
            forum_avatar: creator.string("forum_avator"),
        },
        body: f.string("body"),
        signature: f.string("signature"),
    }
}

/// Map a single board category `{"title": .., "boards": [..]}`.
pub fn map_forum(payload: &Value) -> Result<Forum, CoreError> {
    Ok(forum(Fields::expect_object(payload, "forum category")?))
}

/// Map the `{"categories": [..]}` board listing.
pub fn map_forum_boards(payload: &Value) -> Result<Vec<Forum>, CoreError> {
    Ok(Fields::expect_object(payload, "forum boards")?
        .expect_list("categories", "forum boards")?
        .map(forum)
        .collect())
}

/// Map a single topic object.
pub fn map_forum_topic(payload: &Value) -> Result<ForumTopic, CoreError> {
    Ok(topic(Fields::expect_object(payload, "forum topic")?))
}

/// Map a `{"data": [..]}` topic search page.
pub fn map_forum_topics(payload: &Value) -> Result<Vec<ForumTopic>, CoreError> {
    Ok(Fields::expect_object(payload, "forum topics")?
        .expect_list("data", "forum topics")?
        .map(topic)
        .collect())
}

/// Map a `{"data": {"title": .., "posts": [..]}}` topic detail response.
pub fn map_forum_topic_details(payload: &Value) -> Result<ForumTopicDetails, CoreError> {
    let data = Fields::expect_object(payload, "forum topic details")?
        .expect_nested("data", "forum topic details")?;
    Ok(ForumTopicDetails {
        title: data.string("title"),
        posts: data.list("posts").map(post).collect(),
    })
}

// ── User lists ──────────────────────────────────────────────────

fn anime_list_status(f: Fields<'_>) -> AnimeListStatus {
    AnimeListStatus {
        status: f.symbol("status").unwrap_or(AnimeWatchStatus::Watching),
        score: f.uint("score").unwrap_or(0),
        num_episodes_watched: f.uint("num_episodes_watched").unwrap_or(0),
        is_rewatching: f.boolean("is_rewatching").unwrap_or(false),
        start_date: f.date("start_date"),
        finish_date: f.date("finish_date"),
        updated_at: f.timestamp("updated_at"),
    }
}

fn anime_list_entry(f: Fields<'_>) -> Result<AnimeListEntry, CoreError> {
    Ok(AnimeListEntry {
        anime: anime_fields(f.nested("node"))?,
        list_status: anime_list_status(f.nested("list_status")),
    })
}

/// Map one `{"node": {..}, "list_status": {..}}` list item.
pub fn map_anime_list_entry(payload: &Value) -> Result<AnimeListEntry, CoreError> {
    anime_list_entry(Fields::expect_object(payload, "anime list entry")?)
}

/// Map a user's anime list page.
pub fn map_anime_list(payload: &Value) -> Result<Vec<AnimeListEntry>, CoreError> {
    Fields::expect_object(payload, "anime list")?
        .expect_list("data", "anime list")?
        .map(anime_list_entry)
        .collect()
}

/// Map the list status returned by an anime list update.
pub fn map_anime_list_update(payload: &Value) -> Result<AnimeListUpdate, CoreError> {
    let f = Fields::expect_object(payload, "anime list update")?;
    Ok(AnimeListUpdate {
        status: f.symbol("status"),
        score: f.uint("score").unwrap_or(0),
        num_episodes_watched: f.uint("num_episodes_watched").unwrap_or(0),
        is_rewatching: f.boolean("is_rewatching").unwrap_or(false),
        priority: f.symbol("priority").unwrap_or(ListPriority::Low),
        num_times_rewatched: f.uint("num_times_rewatched").unwrap_or(0),
        rewatch_value: f.symbol("rewatch_value"),
        tags: f.strings("tags"),
        comments: f.string("comments"),
        start_date: f.date("start_date"),
        finish_date: f.date("finish_date"),
        updated_at: f.timestamp("updated_at"),
    })
}

fn manga_list_status(f: Fields<'_>) -> MangaListStatus {
    MangaListStatus {
        status: f.symbol("status").unwrap_or(MangaReadStatus::Reading),
        score: f.uint("score").unwrap_or(0),
        num_volumes_read: f.uint("num_volumes_read").unwrap_or(0),
        num_chapters_read: f.uint("num_chapters_read").unwrap_or(0),
        is_rereading: f.boolean("is_rereading").unwrap_or(false),
        start_date: f.date("start_date"),
        finish_date: f.date("finish_date"),
        updated_at: f.timestamp("updated_at"),
    }
}

fn manga_list_entry(f: Fields<'_>) -> Result<MangaListEntry, CoreError> {
    Ok(MangaListEntry {
        manga: manga_fields(f.nested("node"))?,
        list_status: manga_list_status(f.nested("list_status")),
    })
}

pub fn map_manga_list_entry(payload: &Value) -> Result<MangaListEntry, CoreError> {
    manga_list_entry(Fields::expect_object(payload, "manga list entry")?)
}

pub fn map_manga_list(payload: &Value) -> Result<Vec<MangaListEntry>, CoreError> {
    Fields::expect_object(payload, "manga list")?
        .expect_list("data", "manga list")?
        .map(manga_list_entry)
        .collect()
}

pub fn map_manga_list_update(payload: &Value) -> Result<MangaListUpdate, CoreError> {
    let f = Fields::expect_object(payload, "manga list update")?;
    Ok(MangaListUpdate {
        status: f.symbol("status"),
        score: f.uint("score").unwrap_or(0),
        num_volumes_read: f.uint("num_volumes_read").unwrap_or(0),
        num_chapters_read: f.uint("num_chapters_read").unwrap_or(0),
        is_rereading: f.boolean("is_rereading").unwrap_or(false),
        priority: f.symbol("priority").unwrap_or(ListPriority::Low),
        num_times_reread: f.uint("num_times_reread").unwrap_or(0),
        reread_value: f.symbol("reread_value"),
        tags: f.strings("tags"),
        comments: f.string("comments"),
        start_date: f.date("start_date"),
        finish_date: f.date("finish_date"),
        updated_at: f.timestamp("updated_at"),
    })
}
