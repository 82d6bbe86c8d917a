use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::modules::portfolio::application::domain::entities::{
    Achievement, Certification, Education, EntityId, Experience, Profile, Project, Service, Skill,
    SocialLink,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Gateway backed by the portfolio REST backend.
#[derive(Clone)]
pub struct HttpPortfolioQuery {
    client: Client,
    base_url: String,
}

impl HttpPortfolioQuery {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PortfolioQueryError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PortfolioQueryError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path`; `Ok(None)` on 404, decoded body on 2xx.
    async fn fetch_optional<T>(&self, path: &str) -> Result<Option<T>, PortfolioQueryError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "fetching portfolio resource");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| map_transport_error(path, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(PortfolioQueryError::UnexpectedStatus {
                resource: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| map_transport_error(path, e))?;

        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|e| PortfolioQueryError::SerializationError(format!("{path}: {e}")))
    }

    /// GET `path`; a 404 on a collection is a failure like any other non-2xx.
    async fn fetch<T>(&self, path: &str) -> Result<T, PortfolioQueryError>
    where
        T: DeserializeOwned,
    {
        self.fetch_optional(path)
            .await?
            .ok_or_else(|| PortfolioQueryError::UnexpectedStatus {
                resource: path.to_string(),
                status: StatusCode::NOT_FOUND.as_u16(),
            })
    }
}

fn map_transport_error(path: &str, err: reqwest::Error) -> PortfolioQueryError {
    if err.is_timeout() {
        PortfolioQueryError::Timeout(path.to_string())
    } else {
        PortfolioQueryError::Transport(format!("{path}: {err}"))
    }
}

#[async_trait]
impl PortfolioQuery for HttpPortfolioQuery {
    async fn get_profile(&self) -> Result<Profile, PortfolioQueryError> {
        // A `null` body means no profile has been saved yet.
        self.fetch::<Option<Profile>>("/profile")
            .await
            .map(Option::unwrap_or_default)
    }

    async fn get_all_projects(&self) -> Result<Vec<Project>, PortfolioQueryError> {
        self.fetch("/projects").await
    }

    async fn get_project_by_id(
        &self,
        id: EntityId,
    ) -> Result<Option<Project>, PortfolioQueryError> {
        let project: Option<Project> = self.fetch_optional(&format!("/projects/{id}")).await?;

        Ok(project.filter(|p| {
            let matches = p.id == id;
            if !matches {
                warn!(requested = id, returned = p.id, "Backend returned a different project");
            }
            matches
        }))
    }

    async fn get_all_skills(&self) -> Result<Vec<Skill>, PortfolioQueryError> {
        self.fetch("/skills").await
    }

    async fn get_all_experiences(&self) -> Result<Vec<Experience>, PortfolioQueryError> {
        self.fetch("/experiences").await
    }

    async fn get_all_education(&self) -> Result<Vec<Education>, PortfolioQueryError> {
        self.fetch("/education").await
    }

    async fn get_all_certifications(&self) -> Result<Vec<Certification>, PortfolioQueryError> {
        self.fetch("/certifications").await
    }

    async fn get_all_achievements(&self) -> Result<Vec<Achievement>, PortfolioQueryError> {
        self.fetch("/achievements").await
    }

    async fn get_all_services(&self) -> Result<Vec<Service>, PortfolioQueryError> {
        self.fetch("/services").await
    }

    async fn get_all_social_links(&self) -> Result<Vec<SocialLink>, PortfolioQueryError> {
        self.fetch("/social-links").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway(server: &MockServer) -> HttpPortfolioQuery {
        HttpPortfolioQuery::new(&server.uri(), Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn decodes_collection_and_normalizes_projects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "title": "A", "technologies": "Rust, Actix" },
                { "id": 2, "title": "B", "technologies": ["Go"], "image": "uploads/b.png" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let projects = gateway(&server).get_all_projects().await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].technologies, vec!["Rust", "Actix"]);
        assert_eq!(projects[1].images, vec!["uploads/b.png"]);
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_ignored() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "Ana" })))
            .mount(&server)
            .await;

        let query =
            HttpPortfolioQuery::new(&format!("{}/", server.uri()), DEFAULT_TIMEOUT).unwrap();

        assert_eq!(query.get_profile().await.unwrap().name, "Ana");
    }

    #[tokio::test]
    async fn project_by_id_returns_none_on_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/42"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        assert_eq!(gateway(&server).get_project_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn project_by_id_returns_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/7"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "id": 7, "title": "Seven" })),
            )
            .mount(&server)
            .await;

        let project = gateway(&server).get_project_by_id(7).await.unwrap();
        assert_eq!(project.map(|p| p.title), Some("Seven".to_string()));
    }

    #[tokio::test]
    async fn project_by_id_rejects_a_different_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/7"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "id": 8, "title": "Eight" })),
            )
            .mount(&server)
            .await;

        assert_eq!(gateway(&server).get_project_by_id(7).await.unwrap(), None);
    }

    #[tokio::test]
    async fn profile_null_fields_decode_as_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profile"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "name": "Ana", "bio": null })),
            )
            .mount(&server)
            .await;

        let profile = gateway(&server).get_profile().await.unwrap();
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.bio, "");
    }

    #[tokio::test]
    async fn null_profile_body_decodes_as_empty_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        assert_eq!(gateway(&server).get_profile().await.unwrap(), Profile::default());
    }

    #[tokio::test]
    async fn null_fields_in_collection_do_not_fail_the_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/achievements"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "title": "x", "tags": null, "date": null }
            ])))
            .mount(&server)
            .await;

        let achievements = gateway(&server).get_all_achievements().await.unwrap();
        assert!(achievements[0].tags.is_empty());
    }

    #[tokio::test]
    async fn server_error_maps_to_unexpected_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/skills"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = gateway(&server).get_all_skills().await.unwrap_err();
        assert_eq!(
            err,
            PortfolioQueryError::UnexpectedStatus {
                resource: "/skills".to_string(),
                status: 500
            }
        );
    }

    #[tokio::test]
    async fn missing_collection_is_an_error_not_empty() {
        let server = MockServer::start().await;

        let err = gateway(&server).get_all_services().await.unwrap_err();
        assert!(matches!(
            err,
            PortfolioQueryError::UnexpectedStatus { status: 404, .. }
        ));
    }

    #[tokio::test]
    async fn undecodable_body_maps_to_serialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/education"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = gateway(&server).get_all_education().await.unwrap_err();
        assert!(matches!(err, PortfolioQueryError::SerializationError(_)));
    }

    #[tokio::test]
    async fn slow_backend_maps_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/achievements"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let query = HttpPortfolioQuery::new(&server.uri(), Duration::from_millis(50)).unwrap();

        let err = query.get_all_achievements().await.unwrap_err();
        assert_eq!(err, PortfolioQueryError::Timeout("/achievements".to_string()));
    }

    #[tokio::test]
    async fn unreachable_backend_maps_to_transport_error() {
        let query = HttpPortfolioQuery::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();

        let err = query.get_all_social_links().await.unwrap_err();
        assert!(matches!(
            err,
            PortfolioQueryError::Transport(_) | PortfolioQueryError::Timeout(_)
        ));
    }
}
