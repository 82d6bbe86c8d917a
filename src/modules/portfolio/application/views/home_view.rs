use serde::Serialize;
use utoipa::ToSchema;

use super::social::{hero_social_links, SocialLinkView};
use crate::modules::portfolio::application::aggregator::{AggregatorStatus, PortfolioView};
use crate::modules::portfolio::application::domain::entities::{EntityId, Profile, Service};
use crate::modules::skill::application::domain::{resolve_icon, SkillIcon};
use crate::shared::media::resolve_media_url;

pub const DEFAULT_PROFILE_IMAGE: &str = "/assets/profile-pic.png";
pub const DEFAULT_NAME: &str = "Developer";
pub const DEFAULT_TITLE: &str = "Full Stack Developer";
pub const DEFAULT_BIO: &str =
    "Passionate about building scalable, high-performance web applications with modern technologies.";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProfileView {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub profile_image: String,
    pub resume_url: Option<String>,
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

impl ProfileView {
    pub fn from_profile(profile: Option<&Profile>) -> Self {
        let empty = Profile::default();
        let profile = profile.unwrap_or(&empty);

        let image = resolve_media_url(profile.profile_image.as_deref());

        Self {
            name: non_blank_or(&profile.name, DEFAULT_NAME),
            title: non_blank_or(&profile.title, DEFAULT_TITLE),
            bio: non_blank_or(&profile.bio, DEFAULT_BIO),
            email: profile.email.clone(),
            profile_image: non_blank_or(&image, DEFAULT_PROFILE_IMAGE),
            resume_url: Some(resolve_media_url(profile.resume_url.as_deref()))
                .filter(|url| !url.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ServiceCard {
    pub id: EntityId,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub icon: SkillIcon,
    pub bullets: Vec<String>,
}

impl ServiceCard {
    pub fn from_service(service: &Service) -> Self {
        Self {
            id: service.id,
            title: service.title.clone(),
            subtitle: service.subtitle.clone(),
            description: service.description.clone(),
            icon: resolve_icon(&service.icon, ""),
            bullets: service.bullets.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HomeView {
    pub status: AggregatorStatus,
    pub profile: ProfileView,
    pub social_links: Vec<SocialLinkView>,
    pub services: Vec<ServiceCard>,
    pub project_count: usize,
    pub skill_count: usize,
}

impl HomeView {
    /// `services` comes from its own gateway call, not from the snapshot.
    pub fn build(view: &PortfolioView, services: &[Service]) -> Self {
        let snapshot = &view.snapshot;

        Self {
            status: view.status.clone(),
            profile: ProfileView::from_profile(snapshot.profile.as_ref()),
            social_links: hero_social_links(&snapshot.social_links),
            services: services.iter().map(ServiceCard::from_service).collect(),
            project_count: snapshot.projects.len(),
            skill_count: snapshot.skills.len(),
        }
    }
}
