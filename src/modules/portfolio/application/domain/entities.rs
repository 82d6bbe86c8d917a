// src/modules/portfolio/application/domain/entities.rs
//
// Records as the backend stores them. Loose source shapes (comma separated
// technologies, single image vs. gallery) are folded into one canonical form
// while deserializing, so nothing downstream has to sniff types.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

pub type EntityId = i64;

/// Reads an explicit `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    pub profile_image: Option<String>,
    pub resume_url: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Team,
    #[default]
    #[serde(other)]
    Individual,
}

impl ProjectType {
    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Team => "Team",
            ProjectType::Individual => "Individual",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "RawProject")]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub problem: Option<String>,
    pub technologies: Vec<String>,
    /// Gallery in display order; falls back to the single cover image.
    pub images: Vec<String>,
    /// Cover image shown on the project card.
    pub image: Option<String>,
    pub category: Option<String>,
    pub project_type: ProjectType,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub figma_url: Option<String>,
    pub year: Option<i32>,
    pub created_at: Option<String>,
    pub display_order: Option<i64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TechnologiesRepr {
    List(Vec<String>),
    Delimited(String),
}

impl TechnologiesRepr {
    fn into_list(self) -> Vec<String> {
        let items: Vec<String> = match self {
            TechnologiesRepr::List(items) => items,
            TechnologiesRepr::Delimited(text) => text.split(',').map(str::to_string).collect(),
        };

        items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }
}

#[derive(Deserialize)]
struct RawProject {
    id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(default)]
    long_description: Option<String>,
    #[serde(default)]
    problem: Option<String>,
    #[serde(default)]
    technologies: Option<TechnologiesRepr>,
    #[serde(default)]
    images: Option<Vec<String>>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    project_type: Option<ProjectType>,
    #[serde(default)]
    demo_url: Option<String>,
    #[serde(default)]
    github_url: Option<String>,
    #[serde(default)]
    figma_url: Option<String>,
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    display_order: Option<i64>,
}

/// Gallery if present, else the single image, else nothing.
fn gallery_or_single(images: Option<Vec<String>>, single: Option<&String>) -> Vec<String> {
    match images {
        Some(images) if !images.is_empty() => images,
        _ => single
            .filter(|s| !s.trim().is_empty())
            .map(|s| vec![s.clone()])
            .unwrap_or_default(),
    }
}

impl From<RawProject> for Project {
    fn from(raw: RawProject) -> Self {
        let images = gallery_or_single(raw.images, raw.image.as_ref());
        Self {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            long_description: raw.long_description,
            problem: raw.problem,
            technologies: raw
                .technologies
                .map(TechnologiesRepr::into_list)
                .unwrap_or_default(),
            images,
            image: raw.image,
            category: raw.category,
            project_type: raw.project_type.unwrap_or_default(),
            demo_url: raw.demo_url,
            github_url: raw.github_url,
            figma_url: raw.figma_url,
            year: raw.year,
            created_at: raw.created_at,
            display_order: raw.display_order,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Skill
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default)]
    pub display_order: Option<i64>,
}

//
// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "RawExperience")]
pub struct Experience {
    pub id: EntityId,
    pub position: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    /// Bullet text separated by `•` or newlines.
    pub description: String,
    pub images: Vec<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i64>,
}

impl Experience {
    /// End date, ignored while the position is current.
    pub fn effective_end_date(&self) -> Option<&str> {
        if self.is_current {
            None
        } else {
            self.end_date.as_deref()
        }
    }
}

#[derive(Deserialize)]
struct RawExperience {
    id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    company: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    is_current: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    images: Option<Vec<String>>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    display_order: Option<i64>,
}

impl From<RawExperience> for Experience {
    fn from(raw: RawExperience) -> Self {
        let images = gallery_or_single(raw.images, raw.image_url.as_ref());
        Self {
            id: raw.id,
            position: raw.position,
            company: raw.company,
            location: raw.location,
            start_date: raw.start_date,
            end_date: raw.end_date,
            is_current: raw.is_current,
            description: raw.description.unwrap_or_default(),
            images,
            image_url: raw.image_url,
            display_order: raw.display_order,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Education
// ──────────────────────────────────────────────────────────
//

#[derive(Deserialize)]
#[serde(untagged)]
enum GpaRepr {
    Text(String),
    Number(f64),
}

fn deserialize_gpa<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let gpa = Option::<GpaRepr>::deserialize(deserializer)?;
    Ok(gpa.map(|value| match value {
        GpaRepr::Text(text) => text,
        GpaRepr::Number(number) => number.to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_current: bool,
    #[serde(default, deserialize_with = "deserialize_gpa")]
    pub gpa: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: Option<i64>,
}

impl Education {
    pub fn effective_end_date(&self) -> Option<&str> {
        if self.is_current {
            None
        } else {
            self.end_date.as_deref()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Certification / Achievement
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Certification {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issuer: String,
    #[serde(default)]
    pub issue_date: Option<String>,
    /// `None` means the certification never expires.
    #[serde(default)]
    pub expire_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub certificate_image: Option<String>,
    #[serde(default)]
    pub display_order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Achievement {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub achievement_image: Option<String>,
    #[serde(default)]
    pub achievement_certificate: Option<String>,
    #[serde(default)]
    pub display_order: Option<i64>,
}

//
// ──────────────────────────────────────────────────────────
// Service / SocialLink
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Service {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub display_order: Option<i64>,
}

pub const EMAIL_PLATFORM: &str = "Email";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SocialLink {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub display_order: Option<i64>,
}

impl SocialLink {
    /// The email entry is rendered as the contact call-to-action, not as a social icon.
    pub fn is_email(&self) -> bool {
        self.platform == EMAIL_PLATFORM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn technologies_accept_array_or_delimited_string() {
        let from_list: Project =
            serde_json::from_value(json!({ "id": 1, "technologies": ["Rust", " Actix "] }))
                .unwrap();
        let from_text: Project =
            serde_json::from_value(json!({ "id": 2, "technologies": "Rust, Actix,, " })).unwrap();

        assert_eq!(from_list.technologies, vec!["Rust", "Actix"]);
        assert_eq!(from_text.technologies, vec!["Rust", "Actix"]);
    }

    #[test]
    fn missing_technologies_become_empty_list() {
        let project: Project = serde_json::from_value(json!({ "id": 3 })).unwrap();
        assert!(project.technologies.is_empty());
        assert!(project.images.is_empty());
        assert_eq!(project.project_type, ProjectType::Individual);
    }

    #[test]
    fn single_image_fills_empty_gallery() {
        let project: Project = serde_json::from_value(json!({
            "id": 4,
            "image": "uploads/cover.png",
            "images": []
        }))
        .unwrap();

        assert_eq!(project.images, vec!["uploads/cover.png"]);
        assert_eq!(project.image.as_deref(), Some("uploads/cover.png"));
    }

    #[test]
    fn gallery_takes_precedence_over_single_image() {
        let project: Project = serde_json::from_value(json!({
            "id": 5,
            "image": "cover.png",
            "images": ["a.png", "b.png"]
        }))
        .unwrap();

        assert_eq!(project.images, vec!["a.png", "b.png"]);
    }

    #[test]
    fn unknown_project_type_reads_as_individual() {
        let team: Project =
            serde_json::from_value(json!({ "id": 6, "project_type": "team" })).unwrap();
        let solo: Project =
            serde_json::from_value(json!({ "id": 7, "project_type": "personal" })).unwrap();

        assert_eq!(team.project_type, ProjectType::Team);
        assert_eq!(solo.project_type, ProjectType::Individual);
        assert_eq!(team.project_type.label(), "Team");
    }

    #[test]
    fn normalized_project_serializes_canonical_shape() {
        let project: Project =
            serde_json::from_value(json!({ "id": 8, "technologies": "Go, Redis" })).unwrap();
        let value = serde_json::to_value(&project).unwrap();

        assert_eq!(value["technologies"], json!(["Go", "Redis"]));
        assert_eq!(value["project_type"], "individual");

        let again: Project = serde_json::from_value(value).unwrap();
        assert_eq!(again, project);
    }

    #[test]
    fn current_experience_ignores_end_date() {
        let exp: Experience = serde_json::from_value(json!({
            "id": 1,
            "position": "Engineer",
            "company": "Acme",
            "start_date": "2023-01-01",
            "end_date": "2020-01-01",
            "is_current": true,
            "image_url": "uploads/acme.png"
        }))
        .unwrap();

        assert_eq!(exp.effective_end_date(), None);
        assert_eq!(exp.images, vec!["uploads/acme.png"]);
        assert_eq!(exp.description, "");
    }

    #[test]
    fn gpa_accepts_number_or_text() {
        let numeric: Education =
            serde_json::from_value(json!({ "id": 1, "gpa": 3.75 })).unwrap();
        let text: Education =
            serde_json::from_value(json!({ "id": 2, "gpa": "3.80 / 4.00" })).unwrap();
        let missing: Education = serde_json::from_value(json!({ "id": 3 })).unwrap();

        assert_eq!(numeric.gpa.as_deref(), Some("3.75"));
        assert_eq!(text.gpa.as_deref(), Some("3.80 / 4.00"));
        assert_eq!(missing.gpa, None);
    }

    #[test]
    fn profile_tolerates_missing_fields() {
        let profile: Profile = serde_json::from_value(json!({ "name": "Ana" })).unwrap();
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.email, "");
        assert_eq!(profile.resume_url, None);
    }

    #[test]
    fn profile_reads_null_fields_as_defaults() {
        let profile: Profile = serde_json::from_value(json!({
            "name": "Ana",
            "bio": null,
            "title": null,
            "email": null,
            "profile_image": null
        }))
        .unwrap();

        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.bio, "");
        assert_eq!(profile.title, "");
        assert_eq!(profile.profile_image, None);
    }

    #[test]
    fn project_reads_null_fields_as_defaults() {
        let project: Project = serde_json::from_value(json!({
            "id": 1,
            "title": "x",
            "description": null,
            "technologies": null,
            "images": null,
            "project_type": null
        }))
        .unwrap();

        assert_eq!(project.description, "");
        assert!(project.technologies.is_empty());
        assert!(project.images.is_empty());
        assert_eq!(project.project_type, ProjectType::Individual);
    }

    #[test]
    fn collections_read_null_fields_as_defaults() {
        let achievement: Achievement =
            serde_json::from_value(json!({ "id": 1, "title": "x", "tags": null })).unwrap();
        assert!(achievement.tags.is_empty());

        let skill: Skill =
            serde_json::from_value(json!({ "id": 1, "name": null, "category": null })).unwrap();
        assert_eq!(skill.category, "");

        let exp: Experience = serde_json::from_value(json!({
            "id": 1,
            "position": null,
            "company": null,
            "is_current": null
        }))
        .unwrap();
        assert_eq!(exp.company, "");
        assert!(!exp.is_current);

        let edu: Education = serde_json::from_value(json!({
            "id": 1,
            "degree": null,
            "institution": null,
            "is_current": null,
            "gpa": null
        }))
        .unwrap();
        assert_eq!(edu.degree, "");
        assert_eq!(edu.gpa, None);

        let cert: Certification =
            serde_json::from_value(json!({ "id": 1, "name": null, "issuer": null })).unwrap();
        assert_eq!(cert.issuer, "");

        let service: Service = serde_json::from_value(json!({
            "id": 1,
            "title": null,
            "description": null,
            "icon": null,
            "bullets": null
        }))
        .unwrap();
        assert!(service.bullets.is_empty());

        let link: SocialLink =
            serde_json::from_value(json!({ "id": 1, "platform": null, "url": null })).unwrap();
        assert_eq!(link.url, "");
    }

    #[test]
    fn email_platform_is_case_sensitive() {
        let link = |platform: &str| SocialLink {
            id: 1,
            platform: platform.to_string(),
            icon: None,
            url: String::new(),
            display_order: None,
        };

        assert!(link("Email").is_email());
        assert!(!link("email").is_email());
        assert!(!link("GitHub").is_email());
    }
}
