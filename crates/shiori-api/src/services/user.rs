use chrono::NaiveDate;
use shiori_core::models::{AnimeListEntry, AnimeListUpdate, MangaListEntry, MangaListUpdate};
use shiori_core::serializer;
use shiori_core::vocabulary::{
    AnimeListSortType, AnimeRewatchValue, AnimeWatchStatus, ListPriority, MangaListSortType,
    MangaReadStatus, MangaRereadValue,
};
use shiori_core::{RequestBuilder, Route};

use super::{execute, nsfw_param, page_params, path_segment, require_non_blank, ApiOutcome};
use crate::endpoints::{self, ANIME_FIELDS, MANGA_FIELDS};
use crate::error::ApiError;
use crate::http::HttpService;

/// User name that refers to the owner of the access token.
pub const ME: &str = "@me";

const MAX_SCORE: u8 = 10;

/// Fields to change in an anime list entry. Unset fields are left alone.
///
/// Patching an anime that is not in the list adds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimeListPatch {
    pub status: Option<AnimeWatchStatus>,
    pub is_rewatching: Option<bool>,
    /// 0-10; larger values are clamped. 0 clears the score.
    pub score: Option<u8>,
    pub num_watched_episodes: Option<u32>,
    pub priority: Option<ListPriority>,
    pub num_times_rewatched: Option<u32>,
    pub rewatch_value: Option<AnimeRewatchValue>,
    pub tags: Option<Vec<String>>,
    pub comments: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
}

impl AnimeListPatch {
    /// Form fields for the set values only.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut form = Form::default();
        form.push("status", self.status);
        form.push("is_rewatching", self.is_rewatching);
        form.push("score", self.score.map(|s| s.min(MAX_SCORE)));
        form.push("num_watched_episodes", self.num_watched_episodes);
        form.push("priority", self.priority);
        form.push("num_times_rewatched", self.num_times_rewatched);
        form.push("rewatch_value", self.rewatch_value);
        form.push("tags", self.tags.as_ref().map(|t| t.join(",")));
        form.push("comments", self.comments.as_ref());
        form.push_date("start_date", self.start_date);
        form.push_date("finish_date", self.finish_date);
        form.0
    }
}

/// Fields to change in a manga list entry. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MangaListPatch {
    pub status: Option<MangaReadStatus>,
    pub is_rereading: Option<bool>,
    pub score: Option<u8>,
    pub num_volumes_read: Option<u32>,
    pub num_chapters_read: Option<u32>,
    pub priority: Option<ListPriority>,
    pub num_times_reread: Option<u32>,
    pub reread_value: Option<MangaRereadValue>,
    pub tags: Option<Vec<String>>,
    pub comments: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
}

impl MangaListPatch {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut form = Form::default();
        form.push("status", self.status);
        form.push("is_rereading", self.is_rereading);
        form.push("score", self.score.map(|s| s.min(MAX_SCORE)));
        form.push("num_volumes_read", self.num_volumes_read);
        form.push("num_chapters_read", self.num_chapters_read);
        form.push("priority", self.priority);
        form.push("num_times_reread", self.num_times_reread);
        form.push("reread_value", self.reread_value);
        form.push("tags", self.tags.as_ref().map(|t| t.join(",")));
        form.push("comments", self.comments.as_ref());
        form.push_date("start_date", self.start_date);
        form.push_date("finish_date", self.finish_date);
        form.0
    }
}

#[derive(Default)]
struct Form(Vec<(&'static str, String)>);

impl Form {
    fn push(&mut self, key: &'static str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.0.push((key, value.to_string()));
        }
    }

    fn push_date(&mut self, key: &'static str, date: Option<NaiveDate>) {
        self.push(key, date.map(|d| d.format("%Y-%m-%d")));
    }
}

/// A user's anime and manga lists.
///
/// Reading another user's list works with a client id; changing a list needs
/// an access token.
#[derive(Debug, Clone, Copy)]
pub struct UserService<'a> {
    http: &'a HttpService,
}

impl<'a> UserService<'a> {
    pub fn new(http: &'a HttpService) -> Self {
        Self { http }
    }

    /// One page of a user's anime list. Use [`ME`] for the token's owner.
    pub async fn get_anime_list(
        &self,
        user_name: &str,
        status: Option<AnimeWatchStatus>,
        sort: Option<AnimeListSortType>,
        limit: Option<u32>,
        offset: u32,
    ) -> ApiOutcome<Vec<AnimeListEntry>> {
        let request = self.list_request(
            endpoints::GET_USER_ANIME_LIST,
            user_name,
            ANIME_FIELDS,
            [
                status.map(|s| ("status", s.to_string())),
                sort.map(|s| ("sort", s.to_string())),
            ],
            limit,
            offset,
        );
        execute(self.http, request, serializer::map_anime_list).await
    }

    /// Apply `patch` to an anime's list entry and return the resulting status.
    pub async fn update_anime_list(
        &self,
        anime_id: u64,
        patch: &AnimeListPatch,
    ) -> ApiOutcome<AnimeListUpdate> {
        let request = endpoints::UPDATE_ANIME_LIST
            .generate(&[&anime_id])
            .map(|r| r.with_body(patch.form_fields()));
        execute(self.http, request, serializer::map_anime_list_update).await
    }

    /// Remove an anime from the list. A 404 failure means it was not listed.
    pub async fn delete_anime_from_list(&self, anime_id: u64) -> ApiOutcome<()> {
        let request = endpoints::DELETE_ANIME_FROM_LIST.generate(&[&anime_id]);
        execute(self.http, request, |_| Ok(())).await
    }

    pub async fn get_manga_list(
        &self,
        user_name: &str,
        status: Option<MangaReadStatus>,
        sort: Option<MangaListSortType>,
        limit: Option<u32>,
        offset: u32,
    ) -> ApiOutcome<Vec<MangaListEntry>> {
        let request = self.list_request(
            endpoints::GET_USER_MANGA_LIST,
            user_name,
            MANGA_FIELDS,
            [
                status.map(|s| ("status", s.to_string())),
                sort.map(|s| ("sort", s.to_string())),
            ],
            limit,
            offset,
        );
        execute(self.http, request, serializer::map_manga_list).await
    }

    pub async fn update_manga_list(
        &self,
        manga_id: u64,
        patch: &MangaListPatch,
    ) -> ApiOutcome<MangaListUpdate> {
        let request = endpoints::UPDATE_MANGA_LIST
            .generate(&[&manga_id])
            .map(|r| r.with_body(patch.form_fields()));
        execute(self.http, request, serializer::map_manga_list_update).await
    }

    pub async fn delete_manga_from_list(&self, manga_id: u64) -> ApiOutcome<()> {
        let request = endpoints::DELETE_MANGA_FROM_LIST.generate(&[&manga_id]);
        execute(self.http, request, |_| Ok(())).await
    }

    fn list_request(
        &self,
        route: Route,
        user_name: &str,
        media_fields: &str,
        filters: [Option<(&'static str, String)>; 2],
        limit: Option<u32>,
        offset: u32,
    ) -> Result<RequestBuilder, ApiError> {
        require_non_blank("user_name", user_name)?;
        let user_name = path_segment("user_name", user_name)?;
        Ok(route
            .generate(&[&user_name])?
            .with_query([("fields", format!("list_status,{media_fields}"))])
            .with_query(filters.into_iter().flatten())
            .with_query(page_params(self.http, limit, offset))
            .with_query(nsfw_param(self.http)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::http::testing::{config, serve_once, service};

    fn token_config(base_url: &str) -> ClientConfig {
        ClientConfig {
            access_token: Some("user-token".into()),
            ..config(base_url)
        }
    }

    #[test]
    fn test_anime_patch_sends_only_set_fields() {
        let patch = AnimeListPatch {
            status: Some(AnimeWatchStatus::Completed),
            score: Some(42),
            priority: Some(ListPriority::High),
            rewatch_value: Some(AnimeRewatchValue::VeryHigh),
            tags: Some(vec!["classic".into(), "mecha".into()]),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 7),
            ..AnimeListPatch::default()
        };
        assert_eq!(
            patch.form_fields(),
            vec![
                ("status", "completed".to_string()),
                ("score", "10".to_string()),
                ("priority", "2".to_string()),
                ("rewatch_value", "5".to_string()),
                ("tags", "classic,mecha".to_string()),
                ("start_date", "2024-01-07".to_string()),
            ]
        );
        assert!(AnimeListPatch::default().form_fields().is_empty());
    }

    #[test]
    fn test_manga_patch_fields() {
        let patch = MangaListPatch {
            is_rereading: Some(true),
            num_chapters_read: Some(120),
            reread_value: Some(MangaRereadValue::Empty),
            comments: Some("slow start".into()),
            ..MangaListPatch::default()
        };
        assert_eq!(
            patch.form_fields(),
            vec![
                ("is_rereading", "true".to_string()),
                ("num_chapters_read", "120".to_string()),
                ("reread_value", "0".to_string()),
                ("comments", "slow start".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_anime_list() {
        let (base_url, server) = serve_once(
            200,
            r#"{"data":[{"node":{"id":1,"title":"Cowboy Bebop","num_episodes":26},"list_status":{"status":"completed","score":10,"num_episodes_watched":26,"is_rewatching":false,"updated_at":"2024-02-01T09:30:00+00:00"}}],"paging":{}}"#,
        )
        .await;
        let http = service(&config(&base_url));

        let list = UserService::new(&http)
            .get_anime_list(
                "spike",
                Some(AnimeWatchStatus::Completed),
                Some(AnimeListSortType::ListScore),
                None,
                0,
            )
            .await
            .into_value()
            .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].anime.title, "Cowboy Bebop");
        assert_eq!(list[0].list_status.status, AnimeWatchStatus::Completed);
        assert_eq!(list[0].list_status.num_episodes_watched, 26);

        let raw = server.await.unwrap();
        assert!(raw.starts_with("GET /v2/users/spike/animelist?"));
        assert!(raw.contains("fields=list_status%2Cid%2Ctitle"));
        assert!(raw.contains("status=completed"));
        assert!(raw.contains("sort=list_score"));
    }

    #[tokio::test]
    async fn test_get_manga_list_without_filters() {
        let (base_url, server) = serve_once(200, r#"{"data":[]}"#).await;
        let http = service(&token_config(&base_url));

        let list = UserService::new(&http)
            .get_manga_list(ME, None, None, Some(25), 50)
            .await
            .into_value()
            .unwrap();
        assert!(list.is_empty());

        let raw = server.await.unwrap();
        assert!(raw.starts_with("GET /v2/users/@me/mangalist?"));
        assert!(!raw.contains("status="));
        assert!(!raw.contains("sort="));
        assert!(raw.contains("limit=25"));
        assert!(raw.contains("offset=50"));
    }

    #[tokio::test]
    async fn test_get_anime_list_escapes_user_name() {
        let (base_url, server) = serve_once(200, r#"{"data":[]}"#).await;
        let http = service(&config(&base_url));

        let list = UserService::new(&http)
            .get_anime_list("a/b?c", None, None, None, 0)
            .await
            .into_value()
            .unwrap();
        assert!(list.is_empty());

        let raw = server.await.unwrap();
        assert!(raw.starts_with("GET /v2/users/a%2Fb%3Fc/animelist?fields="));
    }

    #[tokio::test]
    async fn test_get_anime_list_requires_user_name() {
        let http = service(&config("http://127.0.0.1:9/v2"));
        let outcome = UserService::new(&http)
            .get_anime_list("", None, None, None, 0)
            .await;
        assert_eq!(outcome.error().map(|e| e.status), Some(400));
    }

    #[tokio::test]
    async fn test_update_anime_list() {
        let (base_url, server) = serve_once(
            200,
            r#"{"status":"watching","score":8,"num_episodes_watched":3,"is_rewatching":false,"updated_at":"2024-03-01T00:00:00+00:00","priority":0,"num_times_rewatched":0,"rewatch_value":0,"tags":[],"comments":""}"#,
        )
        .await;
        let http = service(&token_config(&base_url));
        let patch = AnimeListPatch {
            status: Some(AnimeWatchStatus::Watching),
            num_watched_episodes: Some(3),
            score: Some(8),
            ..AnimeListPatch::default()
        };

        let update = UserService::new(&http)
            .update_anime_list(52991, &patch)
            .await
            .into_value()
            .unwrap();
        assert_eq!(update.status, Some(AnimeWatchStatus::Watching));
        assert_eq!(update.num_episodes_watched, 3);
        assert_eq!(update.priority, ListPriority::Low);
        assert_eq!(update.rewatch_value, Some(AnimeRewatchValue::Empty));

        let raw = server.await.unwrap();
        assert!(raw.starts_with("PATCH /v2/anime/52991/my_list_status HTTP/1.1"));
        assert!(raw.to_lowercase().contains("authorization: bearer user-token"));
        assert!(raw.ends_with("num_watched_episodes=3&score=8&status=watching"));
    }

    #[tokio::test]
    async fn test_update_manga_list() {
        let (base_url, server) = serve_once(
            200,
            r#"{"status":"reading","num_volumes_read":2,"num_chapters_read":14,"is_rereading":false,"priority":1}"#,
        )
        .await;
        let http = service(&token_config(&base_url));
        let patch = MangaListPatch {
            num_volumes_read: Some(2),
            ..MangaListPatch::default()
        };

        let update = UserService::new(&http)
            .update_manga_list(2, &patch)
            .await
            .into_value()
            .unwrap();
        assert_eq!(update.status, Some(MangaReadStatus::Reading));
        assert_eq!(update.num_chapters_read, 14);
        assert_eq!(update.priority, ListPriority::Medium);

        let raw = server.await.unwrap();
        assert!(raw.starts_with("PATCH /v2/manga/2/my_list_status "));
        assert!(raw.ends_with("num_volumes_read=2"));
    }

    #[tokio::test]
    async fn test_delete_anime_from_list() {
        let (base_url, server) = serve_once(200, "[]").await;
        let http = service(&token_config(&base_url));

        let outcome = UserService::new(&http).delete_anime_from_list(21).await;
        assert_eq!(outcome, shiori_core::Outcome::Success(()));

        let raw = server.await.unwrap();
        assert!(raw.starts_with("DELETE /v2/anime/21/my_list_status "));
    }

    #[tokio::test]
    async fn test_delete_manga_not_in_list() {
        let (base_url, server) = serve_once(404, r#"{"error":"not_found","message":""}"#).await;
        let http = service(&token_config(&base_url));

        let error = UserService::new(&http)
            .delete_manga_from_list(2)
            .await
            .into_error()
            .unwrap();
        assert_eq!(error.status, 404);
        assert_eq!(error.message, "not_found");
        server.await.unwrap();
    }
}
