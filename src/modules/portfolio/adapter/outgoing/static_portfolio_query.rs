use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::portfolio::application::domain::entities::{
    null_as_default, Achievement, Certification, Education, EntityId, Experience, Profile,
    Project, Service, Skill, SocialLink,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError,
};

const EMBEDDED_DATASET: &str = include_str!("../../../../../fixtures/portfolio.json");

/// The whole portfolio as one document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PortfolioDataset {
    #[serde(deserialize_with = "null_as_default")]
    pub profile: Profile,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "null_as_default")]
    pub experiences: Vec<Experience>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<Achievement>,
    #[serde(deserialize_with = "null_as_default")]
    pub services: Vec<Service>,
    #[serde(deserialize_with = "null_as_default")]
    pub social_links: Vec<SocialLink>,
}

impl PortfolioDataset {
    /// Dataset compiled into the binary from `fixtures/portfolio.json`.
    pub fn embedded() -> Result<Self, PortfolioQueryError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self, PortfolioQueryError> {
        serde_json::from_str(json)
            .map_err(|e| PortfolioQueryError::SerializationError(e.to_string()))
    }
}

/// Gateway over an in-memory dataset. Every call succeeds.
#[derive(Debug, Clone)]
pub struct StaticPortfolioQuery {
    dataset: Arc<PortfolioDataset>,
}

impl StaticPortfolioQuery {
    pub fn new(dataset: PortfolioDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    pub fn embedded() -> Result<Self, PortfolioQueryError> {
        PortfolioDataset::embedded().map(Self::new)
    }

    pub fn from_json(json: &str) -> Result<Self, PortfolioQueryError> {
        PortfolioDataset::from_json(json).map(Self::new)
    }
}

#[async_trait]
impl PortfolioQuery for StaticPortfolioQuery {
    async fn get_profile(&self) -> Result<Profile, PortfolioQueryError> {
        Ok(self.dataset.profile.clone())
    }

    async fn get_all_projects(&self) -> Result<Vec<Project>, PortfolioQueryError> {
        Ok(self.dataset.projects.clone())
    }

    async fn get_project_by_id(
        &self,
        id: EntityId,
    ) -> Result<Option<Project>, PortfolioQueryError> {
        Ok(self.dataset.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn get_all_skills(&self) -> Result<Vec<Skill>, PortfolioQueryError> {
        Ok(self.dataset.skills.clone())
    }

    async fn get_all_experiences(&self) -> Result<Vec<Experience>, PortfolioQueryError> {
        Ok(self.dataset.experiences.clone())
    }

    async fn get_all_education(&self) -> Result<Vec<Education>, PortfolioQueryError> {
        Ok(self.dataset.education.clone())
    }

    async fn get_all_certifications(&self) -> Result<Vec<Certification>, PortfolioQueryError> {
        Ok(self.dataset.certifications.clone())
    }

    async fn get_all_achievements(&self) -> Result<Vec<Achievement>, PortfolioQueryError> {
        Ok(self.dataset.achievements.clone())
    }

    async fn get_all_services(&self) -> Result<Vec<Service>, PortfolioQueryError> {
        Ok(self.dataset.services.clone())
    }

    async fn get_all_social_links(&self) -> Result<Vec<SocialLink>, PortfolioQueryError> {
        Ok(self.dataset.social_links.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> StaticPortfolioQuery {
        StaticPortfolioQuery::embedded().expect("embedded dataset must parse")
    }

    #[tokio::test]
    async fn embedded_dataset_parses_every_collection() {
        let query = embedded();

        assert!(!query.get_profile().await.unwrap().name.is_empty());
        assert!(!query.get_all_projects().await.unwrap().is_empty());
        assert!(!query.get_all_skills().await.unwrap().is_empty());
        assert!(!query.get_all_experiences().await.unwrap().is_empty());
        assert!(!query.get_all_education().await.unwrap().is_empty());
        assert!(!query.get_all_certifications().await.unwrap().is_empty());
        assert!(!query.get_all_achievements().await.unwrap().is_empty());
        assert!(!query.get_all_services().await.unwrap().is_empty());
        assert!(!query.get_all_social_links().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn collections_are_returned_as_stored_without_sorting() {
        let query = StaticPortfolioQuery::from_json(
            r#"{ "skills": [
                { "id": 2, "name": "B", "category": "Tools", "display_order": 2 },
                { "id": 1, "name": "A", "category": "Tools", "display_order": 1 }
            ] }"#,
        )
        .unwrap();

        let ids: Vec<_> = query
            .get_all_skills()
            .await
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn project_by_id_finds_exact_match() {
        let query = embedded();

        let project = query.get_project_by_id(2).await.unwrap();
        assert_eq!(project.map(|p| p.id), Some(2));
    }

    #[tokio::test]
    async fn project_by_unknown_id_is_absent() {
        let query = embedded();

        assert_eq!(query.get_project_by_id(9_999).await.unwrap(), None);
        assert_eq!(query.get_project_by_id(-1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn null_sections_read_as_empty() {
        let query =
            StaticPortfolioQuery::from_json(r#"{ "profile": null, "projects": null }"#).unwrap();

        assert_eq!(query.get_profile().await.unwrap(), Profile::default());
        assert!(query.get_all_projects().await.unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = StaticPortfolioQuery::from_json("{ not json").unwrap_err();
        assert!(matches!(err, PortfolioQueryError::SerializationError(_)));
    }
}
