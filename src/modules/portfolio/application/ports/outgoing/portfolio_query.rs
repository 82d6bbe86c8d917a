use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::{
    Achievement, Certification, Education, EntityId, Experience, Profile, Project, Service, Skill,
    SocialLink,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Backend request timed out: {0}")]
    Timeout(String),

    #[error("Backend unreachable: {0}")]
    Transport(String),

    #[error("Backend responded with status {status} for {resource}")]
    UnexpectedStatus { resource: String, status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only gateway, one call per collection)
// ──────────────────────────────────────────────────────────
//

/// Returns records exactly as stored: no filtering, no ordering.
#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    async fn get_profile(&self) -> Result<Profile, PortfolioQueryError>;

    async fn get_all_projects(&self) -> Result<Vec<Project>, PortfolioQueryError>;

    /// A missing project is `Ok(None)`, never an error.
    async fn get_project_by_id(
        &self,
        id: EntityId,
    ) -> Result<Option<Project>, PortfolioQueryError>;

    async fn get_all_skills(&self) -> Result<Vec<Skill>, PortfolioQueryError>;

    async fn get_all_experiences(&self) -> Result<Vec<Experience>, PortfolioQueryError>;

    async fn get_all_education(&self) -> Result<Vec<Education>, PortfolioQueryError>;

    async fn get_all_certifications(&self) -> Result<Vec<Certification>, PortfolioQueryError>;

    async fn get_all_achievements(&self) -> Result<Vec<Achievement>, PortfolioQueryError>;

    async fn get_all_services(&self) -> Result<Vec<Service>, PortfolioQueryError>;

    async fn get_all_social_links(&self) -> Result<Vec<SocialLink>, PortfolioQueryError>;
}

/// Lets one gateway instance be shared between the aggregator and the use cases.
#[async_trait]
impl<T> PortfolioQuery for Arc<T>
where
    T: PortfolioQuery + ?Sized,
{
    async fn get_profile(&self) -> Result<Profile, PortfolioQueryError> {
        (**self).get_profile().await
    }

    async fn get_all_projects(&self) -> Result<Vec<Project>, PortfolioQueryError> {
        (**self).get_all_projects().await
    }

    async fn get_project_by_id(
        &self,
        id: EntityId,
    ) -> Result<Option<Project>, PortfolioQueryError> {
        (**self).get_project_by_id(id).await
    }

    async fn get_all_skills(&self) -> Result<Vec<Skill>, PortfolioQueryError> {
        (**self).get_all_skills().await
    }

    async fn get_all_experiences(&self) -> Result<Vec<Experience>, PortfolioQueryError> {
        (**self).get_all_experiences().await
    }

    async fn get_all_education(&self) -> Result<Vec<Education>, PortfolioQueryError> {
        (**self).get_all_education().await
    }

    async fn get_all_certifications(&self) -> Result<Vec<Certification>, PortfolioQueryError> {
        (**self).get_all_certifications().await
    }

    async fn get_all_achievements(&self) -> Result<Vec<Achievement>, PortfolioQueryError> {
        (**self).get_all_achievements().await
    }

    async fn get_all_services(&self) -> Result<Vec<Service>, PortfolioQueryError> {
        (**self).get_all_services().await
    }

    async fn get_all_social_links(&self) -> Result<Vec<SocialLink>, PortfolioQueryError> {
        (**self).get_all_social_links().await
    }
}
