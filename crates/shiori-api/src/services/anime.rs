use shiori_core::models::{Anime, AnimeRanking};
use shiori_core::serializer;
use shiori_core::vocabulary::{AnimeRankingType, AnimeSeason, AnimeSortType};
use shiori_core::RequestBuilder;

use super::{execute, nsfw_param, page_params, require_non_blank, ApiOutcome};
use crate::endpoints::{self, ANIME_FIELDS};
use crate::error::ApiError;
use crate::http::HttpService;

/// Anime search, details, rankings and seasonal charts.
#[derive(Debug, Clone, Copy)]
pub struct AnimeService<'a> {
    http: &'a HttpService,
}

impl<'a> AnimeService<'a> {
    pub fn new(http: &'a HttpService) -> Self {
        Self { http }
    }

    /// Search anime by title.
    pub async fn search_anime(
        &self,
        query: &str,
        limit: Option<u32>,
        offset: u32,
    ) -> ApiOutcome<Vec<Anime>> {
        let request = self.search_request(query, limit, offset);
        execute(self.http, request, serializer::map_anime_page).await
    }

    /// Full details of one anime. A 404 failure means no such id.
    pub async fn get_anime(&self, anime_id: u64) -> ApiOutcome<Anime> {
        let request = endpoints::GET_ANIME
            .generate(&[&anime_id])
            .map(|r| r.with_query([("fields", ANIME_FIELDS)]));
        execute(self.http, request, serializer::map_anime).await
    }

    pub async fn get_anime_ranking(
        &self,
        ranking_type: AnimeRankingType,
        limit: Option<u32>,
        offset: u32,
    ) -> ApiOutcome<Vec<AnimeRanking>> {
        let request = endpoints::GET_ANIME_RANKING.generate(&[]).map(|r| {
            r.with_query([("ranking_type", ranking_type.to_string())])
                .with_query([("fields", ANIME_FIELDS)])
                .with_query(page_params(self.http, limit, offset))
                .with_query(nsfw_param(self.http))
        });
        execute(self.http, request, serializer::map_anime_ranking).await
    }

    /// Anime of one season, sorted by score unless `sort` says otherwise.
    pub async fn get_seasonal_anime(
        &self,
        year: u32,
        season: AnimeSeason,
        sort: Option<AnimeSortType>,
        limit: Option<u32>,
        offset: u32,
    ) -> ApiOutcome<Vec<Anime>> {
        let sort = sort.unwrap_or(AnimeSortType::AnimeScore);
        let request = endpoints::GET_SEASONAL_ANIME
            .generate(&[&year, &season])
            .map(|r| {
                r.with_query([("sort", sort.to_string())])
                    .with_query([("fields", ANIME_FIELDS)])
                    .with_query(page_params(self.http, limit, offset))
                    .with_query(nsfw_param(self.http))
            });
        execute(self.http, request, serializer::map_anime_page).await
    }

    fn search_request(
        &self,
        query: &str,
        limit: Option<u32>,
        offset: u32,
    ) -> Result<RequestBuilder, ApiError> {
        require_non_blank("query", query)?;
        Ok(endpoints::SEARCH_ANIME
            .generate(&[])?
            .with_query([("q", query), ("fields", ANIME_FIELDS)])
            .with_query(page_params(self.http, limit, offset))
            .with_query(nsfw_param(self.http)))
    }
}
