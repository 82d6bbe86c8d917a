use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::pagination::{Pager, ACHIEVEMENTS_PER_PAGE, CERTIFICATIONS_PER_PAGE};
use super::skill_groups::{group_skills, SkillGroup};
use super::timeline::{
    bullets, expiry_label, month_year_label, month_year_period, year_period, ONGOING_LONG,
    ONGOING_SHORT,
};
use crate::modules::portfolio::application::aggregator::{AggregatorStatus, PortfolioView};
use crate::modules::portfolio::application::domain::entities::{
    Achievement, Certification, Education, EntityId, Experience,
};
use crate::shared::media::{lightbox_url, resolve_media_url};

/// Bullets shown on an experience card; the detail view shows all of them.
pub const CARD_BULLET_LIMIT: usize = 3;
pub const DEFAULT_ABOUT_BIO: &str = "Passionate developer building amazing web experiences";

#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct AboutQuery {
    /// Zero-based certifications page
    pub certification_page: usize,
    /// Zero-based achievements page
    pub achievement_page: usize,
}

//
// ──────────────────────────────────────────────────────────
// Experience / Education
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ExperienceDetail {
    pub period: String,
    pub bullets: Vec<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ExperienceCard {
    pub id: EntityId,
    pub position: String,
    pub company: String,
    pub location: Option<String>,
    pub period: String,
    pub highlights: Vec<String>,
    pub cover_image: Option<String>,
    pub detail: ExperienceDetail,
}

impl ExperienceCard {
    pub fn from_experience(exp: &Experience) -> Self {
        let all_bullets = bullets(&exp.description);
        let images: Vec<String> = exp
            .images
            .iter()
            .map(|image| resolve_media_url(Some(image)))
            .filter(|url| !url.is_empty())
            .collect();

        Self {
            id: exp.id,
            position: exp.position.clone(),
            company: exp.company.clone(),
            location: exp.location.clone(),
            period: year_period(
                exp.start_date.as_deref(),
                exp.effective_end_date(),
                ONGOING_SHORT,
            ),
            highlights: all_bullets.iter().take(CARD_BULLET_LIMIT).cloned().collect(),
            cover_image: images.first().cloned(),
            detail: ExperienceDetail {
                period: month_year_period(exp.start_date.as_deref(), exp.effective_end_date()),
                bullets: all_bullets,
                images,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EducationEntry {
    pub id: EntityId,
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub period: String,
    pub gpa: Option<String>,
    pub description: Option<String>,
}

impl EducationEntry {
    pub fn from_education(edu: &Education) -> Self {
        Self {
            id: edu.id,
            degree: edu.degree.clone(),
            institution: edu.institution.clone(),
            location: edu.location.clone(),
            period: year_period(
                edu.start_date.as_deref(),
                edu.effective_end_date(),
                ONGOING_LONG,
            ),
            gpa: edu.gpa.clone(),
            description: edu.description.clone(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Certifications / Achievements
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CertificationCard {
    pub id: EntityId,
    pub name: String,
    pub issuer: String,
    pub issued: String,
    pub expiry: String,
    pub description: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image: Option<String>,
    pub lightbox_url: Option<String>,
}

impl CertificationCard {
    pub fn from_certification(cert: &Certification) -> Self {
        Self {
            id: cert.id,
            name: cert.name.clone(),
            issuer: cert.issuer.clone(),
            issued: month_year_label(cert.issue_date.as_deref()),
            expiry: expiry_label(cert.expire_date.as_deref()),
            description: cert.description.clone(),
            credential_id: cert.credential_id.clone(),
            credential_url: cert.credential_url.clone(),
            image: resolved(cert.certificate_image.as_deref()),
            lightbox_url: lightbox_url(cert.certificate_image.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AchievementCard {
    pub id: EntityId,
    pub title: String,
    pub organization: Option<String>,
    pub date: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub image: Option<String>,
    pub image_lightbox_url: Option<String>,
    pub certificate_lightbox_url: Option<String>,
}

impl AchievementCard {
    pub fn from_achievement(ach: &Achievement) -> Self {
        Self {
            id: ach.id,
            title: ach.title.clone(),
            organization: ach.organization.clone(),
            date: month_year_label(ach.date.as_deref()),
            description: ach.description.clone(),
            tags: ach.tags.clone(),
            link: ach.link.clone(),
            image: resolved(ach.achievement_image.as_deref()),
            image_lightbox_url: lightbox_url(ach.achievement_image.as_deref()),
            certificate_lightbox_url: lightbox_url(ach.achievement_certificate.as_deref()),
        }
    }
}

fn resolved(raw: Option<&str>) -> Option<String> {
    Some(resolve_media_url(raw)).filter(|url| !url.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PagedCards<T> {
    pub items: Vec<T>,
    pub pager: Pager,
    pub has_previous: bool,
    pub has_next: bool,
    pub shows_controls: bool,
}

impl<T> PagedCards<T> {
    fn paginate<S>(source: &[S], page: usize, per_page: usize, to_card: impl Fn(&S) -> T) -> Self {
        let pager = Pager::new(page, per_page, source.len());
        Self {
            items: pager.slice(source).iter().map(to_card).collect(),
            has_previous: pager.has_previous(),
            has_next: pager.has_next(),
            shows_controls: pager.shows_controls(),
            pager,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Page
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AboutView {
    pub status: AggregatorStatus,
    pub bio: String,
    pub skill_groups: Vec<SkillGroup>,
    pub experiences: Vec<ExperienceCard>,
    pub education: Vec<EducationEntry>,
    pub certifications: PagedCards<CertificationCard>,
    pub achievements: PagedCards<AchievementCard>,
}

impl AboutView {
    pub fn build(view: &PortfolioView, query: AboutQuery) -> Self {
        let snapshot = &view.snapshot;

        Self {
            status: view.status.clone(),
            bio: snapshot
                .profile
                .as_ref()
                .map(|p| p.bio.clone())
                .filter(|bio| !bio.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ABOUT_BIO.to_string()),
            skill_groups: group_skills(&snapshot.skills),
            experiences: snapshot
                .experiences
                .iter()
                .map(ExperienceCard::from_experience)
                .collect(),
            education: snapshot
                .education
                .iter()
                .map(EducationEntry::from_education)
                .collect(),
            certifications: PagedCards::paginate(
                &snapshot.certifications,
                query.certification_page,
                CERTIFICATIONS_PER_PAGE,
                CertificationCard::from_certification,
            ),
            achievements: PagedCards::paginate(
                &snapshot.achievements,
                query.achievement_page,
                ACHIEVEMENTS_PER_PAGE,
                AchievementCard::from_achievement,
            ),
        }
    }
}
