use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::HttpService;
use crate::services::{AnimeService, ForumService, MangaService, UserService};

/// MyAnimeList API v2 client.
///
/// Built from a client id for public data, or from a user access token for
/// list management. All service handles share one connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpService,
}

impl Client {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpService::new(config)?,
        })
    }

    /// Client using the config file (or defaults) with `client_id` filled in.
    ///
    /// An access token stored in the config file is ignored.
    pub fn with_client_id(client_id: impl Into<String>) -> Result<Self, ApiError> {
        Self::new(&ClientConfig::load()?.with_client_id(client_id))
    }

    /// Client authenticated as a user.
    pub fn with_access_token(access_token: impl Into<String>) -> Result<Self, ApiError> {
        Self::new(&ClientConfig::load()?.with_access_token(access_token))
    }

    pub fn from_http(http: HttpService) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpService {
        &self.http
    }

    pub fn anime(&self) -> AnimeService<'_> {
        AnimeService::new(&self.http)
    }

    pub fn manga(&self) -> MangaService<'_> {
        MangaService::new(&self.http)
    }

    pub fn forum(&self) -> ForumService<'_> {
        ForumService::new(&self.http)
    }

    pub fn user(&self) -> UserService<'_> {
        UserService::new(&self.http)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;
    use crate::http::testing::{config, serve_once, service};

    #[test]
    fn test_new_requires_credentials() {
        let err = Client::new(&ClientConfig::default()).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_token_client_uses_bearer() {
        let client = Client::new(&ClientConfig {
            client_id: Some("id".into()),
            access_token: Some("tok".into()),
            ..ClientConfig::default()
        })
        .unwrap();
        assert_eq!(
            client.http().credentials(),
            &Credentials::AccessToken("tok".into())
        );
    }

    #[tokio::test]
    async fn test_services_share_transport() {
        let (base_url, server) = serve_once(200, r#"{"categories":[]}"#).await;
        let client = Client::from_http(service(&config(&base_url)));

        let forums = client.forum().get_forum_boards().await;
        assert_eq!(forums.into_value(), Some(Vec::new()));
        assert!(server.await.unwrap().starts_with("GET /v2/forum/boards "));
    }
}
