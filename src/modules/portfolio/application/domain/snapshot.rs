use serde::Serialize;
use utoipa::ToSchema;

use super::display_order::sort_by_display_order;
use super::entities::{
    Achievement, Certification, Education, Experience, Profile, Project, Service, Skill,
    SocialLink,
};

/// Everything the pages render, replaced as a whole on every successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct PortfolioSnapshot {
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub social_links: Vec<SocialLink>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<Achievement>,
    pub services: Vec<Service>,
}

impl PortfolioSnapshot {
    /// Builds a snapshot with every order-sensitive collection sorted.
    #[allow(clippy::too_many_arguments)]
    pub fn ordered(
        profile: Profile,
        projects: Vec<Project>,
        skills: Vec<Skill>,
        experiences: Vec<Experience>,
        social_links: Vec<SocialLink>,
        education: Vec<Education>,
        certifications: Vec<Certification>,
        achievements: Vec<Achievement>,
        services: Vec<Service>,
    ) -> Self {
        Self {
            profile: Some(profile),
            projects: sort_by_display_order(projects),
            skills: sort_by_display_order(skills),
            experiences: sort_by_display_order(experiences),
            social_links: sort_by_display_order(social_links),
            education: sort_by_display_order(education),
            certifications: sort_by_display_order(certifications),
            achievements: sort_by_display_order(achievements),
            services: sort_by_display_order(services),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.profile.is_none()
            && self.projects.is_empty()
            && self.skills.is_empty()
            && self.experiences.is_empty()
            && self.social_links.is_empty()
            && self.education.is_empty()
            && self.certifications.is_empty()
            && self.achievements.is_empty()
            && self.services.is_empty()
    }
}
