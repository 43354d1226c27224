use shiori_core::models::{Forum, ForumTopic, ForumTopicDetails};
use shiori_core::serializer;
use shiori_core::RequestBuilder;

use super::{execute, page_params, ApiOutcome};
use crate::endpoints;
use crate::error::ApiError;
use crate::http::HttpService;

/// Filters for a forum topic search. At least one must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicQuery {
    pub query: Option<String>,
    pub board_id: Option<u64>,
    pub subboard_id: Option<u64>,
    /// User who started the topic.
    pub topic_user_name: Option<String>,
    /// User who posted in the topic.
    pub user_name: Option<String>,
}

impl TopicQuery {
    /// Free-text search.
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Set filters as query parameters. Blank strings count as unset.
    fn params(&self) -> Vec<(&'static str, String)> {
        let text = |key: &'static str, value: &Option<String>| -> Option<(&'static str, String)> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (key, v.to_owned()))
        };
        [
            text("q", &self.query),
            self.board_id.map(|id| ("board_id", id.to_string())),
            self.subboard_id.map(|id| ("subboard_id", id.to_string())),
            text("topic_user_name", &self.topic_user_name),
            text("user_name", &self.user_name),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Forum boards, topic search and topic threads.
#[derive(Debug, Clone, Copy)]
pub struct ForumService<'a> {
    http: &'a HttpService,
}

impl<'a> ForumService<'a> {
    pub fn new(http: &'a HttpService) -> Self {
        Self { http }
    }

    /// Every board, grouped by category.
    pub async fn get_forum_boards(&self) -> ApiOutcome<Vec<Forum>> {
        let request = endpoints::GET_FORUM_BOARDS.generate(&[]);
        execute(self.http, request, serializer::map_forum_boards).await
    }

    /// Search topics. An empty query fails with status 400 without a request.
    pub async fn get_forum_topics(
        &self,
        query: &TopicQuery,
        limit: Option<u32>,
        offset: u32,
    ) -> ApiOutcome<Vec<ForumTopic>> {
        let request = self.topics_request(query, limit, offset);
        execute(self.http, request, serializer::map_forum_topics).await
    }

    /// A topic's posts, in thread order.
    pub async fn get_forum_topic_details(
        &self,
        topic_id: u64,
        limit: Option<u32>,
        offset: u32,
    ) -> ApiOutcome<ForumTopicDetails> {
        let request = endpoints::GET_FORUM_TOPIC_DETAILS
            .generate(&[&topic_id])
            .map(|r| r.with_query(page_params(self.http, limit, offset)));
        execute(self.http, request, serializer::map_forum_topic_details).await
    }

    fn topics_request(
        &self,
        query: &TopicQuery,
        limit: Option<u32>,
        offset: u32,
    ) -> Result<RequestBuilder, ApiError> {
        let filters = query.params();
        if filters.is_empty() {
            return Err(ApiError::InvalidArgument(
                "at least one topic filter must be specified".into(),
            ));
        }
        Ok(endpoints::GET_FORUM_TOPICS
            .generate(&[])?
            .with_query(filters)
            .with_query(page_params(self.http, limit, offset)))
    }
}
