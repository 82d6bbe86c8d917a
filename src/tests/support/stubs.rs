use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::modules::contact::application::domain::ContactReceipt;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactMessageCommand, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::modules::portfolio::adapter::outgoing::PortfolioDataset;
use crate::modules::portfolio::application::domain::entities::{
    Achievement, Certification, Education, EntityId, Experience, Profile, Project, Service, Skill,
    SocialLink,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError,
};

/* --------------------------------------------------
 * PortfolioQuery stub with injectable failure and latency
 * -------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingCall {
    Profile,
    Projects,
    ProjectById,
    Skills,
    Experiences,
    Education,
    Certifications,
    Achievements,
    Services,
    SocialLinks,
}

impl FailingCall {
    /// The nine calls the aggregator issues per batch.
    pub const ALL: [FailingCall; 9] = [
        FailingCall::Profile,
        FailingCall::Projects,
        FailingCall::Skills,
        FailingCall::Experiences,
        FailingCall::Education,
        FailingCall::Certifications,
        FailingCall::Achievements,
        FailingCall::Services,
        FailingCall::SocialLinks,
    ];
}

struct StubState {
    dataset: PortfolioDataset,
    failing: Option<FailingCall>,
}

#[derive(Clone)]
pub struct StubPortfolioQuery {
    state: Arc<Mutex<StubState>>,
    delay: Duration,
}

impl StubPortfolioQuery {
    pub fn new(dataset: PortfolioDataset) -> Self {
        Self {
            state: Arc::new(Mutex::new(StubState {
                dataset,
                failing: None,
            })),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn fail_on(&self, call: Option<FailingCall>) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .failing = call;
    }

    pub fn replace_dataset(&self, dataset: PortfolioDataset) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .dataset = dataset;
    }

    /// Reads the dataset when the call starts, then waits out the delay.
    async fn call<T>(
        &self,
        call: FailingCall,
        pick: impl FnOnce(&PortfolioDataset) -> T,
    ) -> Result<T, PortfolioQueryError> {
        let outcome = {
            let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.failing == Some(call) {
                Err(PortfolioQueryError::Transport(format!(
                    "injected failure on {call:?}"
                )))
            } else {
                Ok(pick(&state.dataset))
            }
        };

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        outcome
    }
}

#[async_trait]
impl PortfolioQuery for StubPortfolioQuery {
    async fn get_profile(&self) -> Result<Profile, PortfolioQueryError> {
        self.call(FailingCall::Profile, |d| d.profile.clone()).await
    }

    async fn get_all_projects(&self) -> Result<Vec<Project>, PortfolioQueryError> {
        self.call(FailingCall::Projects, |d| d.projects.clone()).await
    }

    async fn get_project_by_id(
        &self,
        id: EntityId,
    ) -> Result<Option<Project>, PortfolioQueryError> {
        self.call(FailingCall::ProjectById, |d| {
            d.projects.iter().find(|p| p.id == id).cloned()
        })
        .await
    }

    async fn get_all_skills(&self) -> Result<Vec<Skill>, PortfolioQueryError> {
        self.call(FailingCall::Skills, |d| d.skills.clone()).await
    }

    async fn get_all_experiences(&self) -> Result<Vec<Experience>, PortfolioQueryError> {
        self.call(FailingCall::Experiences, |d| d.experiences.clone())
            .await
    }

    async fn get_all_education(&self) -> Result<Vec<Education>, PortfolioQueryError> {
        self.call(FailingCall::Education, |d| d.education.clone())
            .await
    }

    async fn get_all_certifications(&self) -> Result<Vec<Certification>, PortfolioQueryError> {
        self.call(FailingCall::Certifications, |d| d.certifications.clone())
            .await
    }

    async fn get_all_achievements(&self) -> Result<Vec<Achievement>, PortfolioQueryError> {
        self.call(FailingCall::Achievements, |d| d.achievements.clone())
            .await
    }

    async fn get_all_services(&self) -> Result<Vec<Service>, PortfolioQueryError> {
        self.call(FailingCall::Services, |d| d.services.clone()).await
    }

    async fn get_all_social_links(&self) -> Result<Vec<SocialLink>, PortfolioQueryError> {
        self.call(FailingCall::SocialLinks, |d| d.social_links.clone())
            .await
    }
}

/* --------------------------------------------------
 * Contact use case stub
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubSubmitContactMessageUseCase {
    result: Result<ContactReceipt, SubmitContactMessageError>,
}

impl StubSubmitContactMessageUseCase {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            result: Ok(ContactReceipt::sent()),
        })
    }

    pub fn failing(err: SubmitContactMessageError) -> Arc<Self> {
        Arc::new(Self { result: Err(err) })
    }
}

#[async_trait]
impl SubmitContactMessageUseCase for StubSubmitContactMessageUseCase {
    async fn execute(
        &self,
        _command: SubmitContactMessageCommand,
    ) -> Result<ContactReceipt, SubmitContactMessageError> {
        self.result.clone()
    }
}
