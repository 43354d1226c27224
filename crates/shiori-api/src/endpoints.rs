//! Route table of the MyAnimeList v2 API, relative to the configured base URL.

use shiori_core::vocabulary::HttpMethod::{Delete, Get, Patch};
use shiori_core::Route;

// Anime
pub const SEARCH_ANIME: Route = Route::new(Get, "/anime");
pub const GET_ANIME: Route = Route::new(Get, "/anime/()");
pub const GET_ANIME_RANKING: Route = Route::new(Get, "/anime/ranking");
pub const GET_SEASONAL_ANIME: Route = Route::new(Get, "/anime/season/()/()");

// Manga
pub const SEARCH_MANGA: Route = Route::new(Get, "/manga");
pub const GET_MANGA: Route = Route::new(Get, "/manga/()");
pub const GET_MANGA_RANKING: Route = Route::new(Get, "/manga/ranking");

// Forum
pub const GET_FORUM_BOARDS: Route = Route::new(Get, "/forum/boards");
pub const GET_FORUM_TOPICS: Route = Route::new(Get, "/forum/topics");
pub const GET_FORUM_TOPIC_DETAILS: Route = Route::new(Get, "/forum/topic/()");

// User lists
pub const GET_USER_ANIME_LIST: Route = Route::new(Get, "/users/()/animelist");
pub const UPDATE_ANIME_LIST: Route = Route::new(Patch, "/anime/()/my_list_status");
pub const DELETE_ANIME_FROM_LIST: Route = Route::new(Delete, "/anime/()/my_list_status");
pub const GET_USER_MANGA_LIST: Route = Route::new(Get, "/users/()/mangalist");
pub const UPDATE_MANGA_LIST: Route = Route::new(Patch, "/manga/()/my_list_status");
pub const DELETE_MANGA_FROM_LIST: Route = Route::new(Delete, "/manga/()/my_list_status");

/// Every anime field the serializer understands.
pub const ANIME_FIELDS: &str = "id,title,main_picture,alternative_titles,start_date,end_date,\
                                synopsis,mean,rank,popularity,num_list_users,num_scoring_users,\
                                nsfw,created_at,updated_at,media_type,status,genres,num_episodes,\
                                start_season,broadcast,source,average_episode_duration,rating,\
                                pictures,background,related_anime,related_manga,recommendations,\
                                studios,statistics";

/// Every manga field the serializer understands.
pub const MANGA_FIELDS: &str = "id,title,main_picture,alternative_titles,start_date,end_date,\
                                synopsis,mean,rank,popularity,num_list_users,num_scoring_users,\
                                nsfw,created_at,updated_at,media_type,status,genres,num_volumes,\
                                num_chapters,authors{first_name,last_name},pictures,background,\
                                related_anime,related_manga,recommendations,serialization";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_counts() {
        assert_eq!(SEARCH_ANIME.placeholders(), 0);
        assert_eq!(GET_ANIME.placeholders(), 1);
        assert_eq!(GET_SEASONAL_ANIME.placeholders(), 2);
        assert_eq!(GET_USER_MANGA_LIST.placeholders(), 1);
        assert_eq!(DELETE_MANGA_FROM_LIST.method(), Delete);
        assert_eq!(UPDATE_ANIME_LIST.method(), Patch);
    }

    #[test]
    fn test_field_lists_have_no_whitespace() {
        for fields in [ANIME_FIELDS, MANGA_FIELDS] {
            assert!(!fields.contains(char::is_whitespace));
            assert!(fields.starts_with("id,title,"));
        }
    }
}
