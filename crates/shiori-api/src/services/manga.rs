use shiori_core::models::{Manga, MangaRanking};
use shiori_core::serializer;
use shiori_core::vocabulary::MangaRankingType;
use shiori_core::RequestBuilder;

use super::{execute, nsfw_param, page_params, require_non_blank, ApiOutcome};
use crate::endpoints::{self, MANGA_FIELDS};
use crate::error::ApiError;
use crate::http::HttpService;

/// Manga search, details and rankings.
#[derive(Debug, Clone, Copy)]
pub struct MangaService<'a> {
    http: &'a HttpService,
}

impl<'a> MangaService<'a> {
    pub fn new(http: &'a HttpService) -> Self {
        Self { http }
    }

    pub async fn search_manga(
        &self,
        query: &str,
        limit: Option<u32>,
        offset: u32,
    ) -> ApiOutcome<Vec<Manga>> {
        let request = self.search_request(query, limit, offset);
        execute(self.http, request, serializer::map_manga_page).await
    }

    pub async fn get_manga(&self, manga_id: u64) -> ApiOutcome<Manga> {
        let request = endpoints::GET_MANGA
            .generate(&[&manga_id])
            .map(|r| r.with_query([("fields", MANGA_FIELDS)]));
        execute(self.http, request, serializer::map_manga).await
    }

    pub async fn get_manga_ranking(
        &self,
        ranking_type: MangaRankingType,
        limit: Option<u32>,
        offset: u32,
    ) -> ApiOutcome<Vec<MangaRanking>> {
        let request = endpoints::GET_MANGA_RANKING.generate(&[]).map(|r| {
            r.with_query([("ranking_type", ranking_type.to_string())])
                .with_query([("fields", MANGA_FIELDS)])
                .with_query(page_params(self.http, limit, offset))
                .with_query(nsfw_param(self.http))
        });
        execute(self.http, request, serializer::map_manga_ranking).await
    }

    fn search_request(
        &self,
        query: &str,
        limit: Option<u32>,
        offset: u32,
    ) -> Result<RequestBuilder, ApiError> {
        require_non_blank("query", query)?;
        Ok(endpoints::SEARCH_MANGA
            .generate(&[])?
            .with_query([("q", query), ("fields", MANGA_FIELDS)])
            .with_query(page_params(self.http, limit, offset))
            .with_query(nsfw_param(self.http)))
    }
}

#[cfg(test)]
mod tests {
    use shiori_core::vocabulary::MangaType;

    use super::*;
    use crate::http::testing::{config, serve_once, service};

    #[tokio::test]
    async fn test_get_manga() {
        let (base_url, server) = serve_once(
            200,
            r#"{"id":2,"title":"Berserk","media_type":"manga","authors":[{"node":{"id":1868,"first_name":"Kentarou","last_name":"Miura"},"role":"Story & Art"}]}"#,
        )
        .await;
        let http = service(&config(&base_url));

        let manga = MangaService::new(&http).get_manga(2).await.into_value().unwrap();
        assert_eq!(manga.title, "Berserk");
        assert_eq!(manga.media_type, MangaType::Manga);
        assert_eq!(manga.authors[0].node.first_name.as_deref(), Some("Kentarou"));

        let raw = server.await.unwrap();
        assert!(raw.starts_with("GET /v2/manga/2?fields="));
        assert!(raw.contains("authors%7Bfirst_name%2Clast_name%7D"));
    }

    #[tokio::test]
    async fn test_search_manga() {
        let (base_url, server) = serve_once(200, r#"{"data":[{"node":{"id":13,"title":"One Piece"}}]}"#).await;
        let http = service(&config(&base_url));

        let manga = MangaService::new(&http)
            .search_manga("one piece", Some(3), 6)
            .await
            .into_value()
            .unwrap();
        assert_eq!(manga[0].id, 13);
        assert_eq!(manga[0].num_chapters, 0);

        let raw = server.await.unwrap();
        assert!(raw.contains("q=one+piece"));
        assert!(raw.contains("offset=6"));
    }

    #[tokio::test]
    async fn test_get_manga_ranking() {
        let (base_url, server) = serve_once(
            200,
            r#"{"data":[{"node":{"id":2,"title":"Berserk"},"ranking":{"rank":1}},{"node":{"id":1706,"title":"JoJo"},"ranking":{"rank":2}}]}"#,
        )
        .await;
        let http = service(&config(&base_url));

        let ranking = MangaService::new(&http)
            .get_manga_ranking(MangaRankingType::Manga, None, 0)
            .await
            .into_value()
            .unwrap();
        let ranks: Vec<u32> = ranking.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2]);

        let raw = server.await.unwrap();
        assert!(raw.contains("ranking_type=manga"));
    }
}
