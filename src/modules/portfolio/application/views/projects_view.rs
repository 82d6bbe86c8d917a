use serde::Serialize;
use utoipa::ToSchema;

use super::carousel::{DetailModal, ImageCarousel};
use super::project_filter::{filter_projects, ALL_PROJECTS, PROJECT_FILTERS};
use super::timeline::year_of;
use crate::modules::portfolio::application::aggregator::{AggregatorStatus, PortfolioView};
use crate::modules::portfolio::application::domain::entities::{EntityId, Project};
use crate::shared::media::resolve_media_url;

/// Technologies shown on a card before collapsing into `+N`.
pub const CARD_TECHNOLOGY_LIMIT: usize = 3;
pub const DEFAULT_PROJECT_CATEGORY: &str = "Personal Project";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectLinks {
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub figma_url: Option<String>,
    /// `Figma` next to a repository link, `Design` when it stands alone.
    pub figma_label: Option<String>,
}

impl ProjectLinks {
    fn from_project(project: &Project) -> Self {
        let figma_label = project.figma_url.as_ref().map(|_| {
            if project.github_url.is_some() {
                "Figma".to_string()
            } else {
                "Design".to_string()
            }
        });

        Self {
            demo_url: project.demo_url.clone(),
            github_url: project.github_url.clone(),
            figma_url: project.figma_url.clone(),
            figma_label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectCard {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub problem: Option<String>,
    pub cover_image: Option<String>,
    pub technologies: Vec<String>,
    pub extra_technology_count: usize,
    pub project_type: String,
    pub year: Option<i32>,
    pub category: String,
    pub links: ProjectLinks,
}

impl ProjectCard {
    pub fn from_project(project: &Project) -> Self {
        let technologies: Vec<String> = project
            .technologies
            .iter()
            .take(CARD_TECHNOLOGY_LIMIT)
            .cloned()
            .collect();

        Self {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            problem: project.problem.clone(),
            cover_image: project
                .image
                .as_deref()
                .map(|image| resolve_media_url(Some(image)))
                .filter(|url| !url.is_empty()),
            extra_technology_count: project.technologies.len().saturating_sub(technologies.len()),
            technologies,
            project_type: project.project_type.label().to_string(),
            year: project_year(project),
            category: project
                .category
                .clone()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PROJECT_CATEGORY.to_string()),
            links: ProjectLinks::from_project(project),
        }
    }
}

/// Explicit year, else the year the record was created.
fn project_year(project: &Project) -> Option<i32> {
    project.year.or_else(|| year_of(project.created_at.as_deref()))
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectsView {
    pub status: AggregatorStatus,
    pub filters: Vec<String>,
    pub active_filter: String,
    pub projects: Vec<ProjectCard>,
}

impl ProjectsView {
    pub fn build(view: &PortfolioView, filter: Option<&str>) -> Self {
        let filter = filter.map(str::trim).filter(|f| !f.is_empty());

        Self {
            status: view.status.clone(),
            filters: PROJECT_FILTERS.iter().map(|f| f.to_string()).collect(),
            active_filter: filter.unwrap_or(ALL_PROJECTS).to_string(),
            projects: filter_projects(&view.snapshot.projects, filter)
                .into_iter()
                .map(ProjectCard::from_project)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub card: ProjectCard,
    pub long_description: Option<String>,
    /// Every technology, not only the card preview.
    pub all_technologies: Vec<String>,
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectDetailView {
    pub modal: DetailModal<ProjectDetail>,
    pub current_image: Option<String>,
}

impl ProjectDetailView {
    /// Opens the detail overlay with its gallery positioned at `image_index`.
    pub fn build(project: &Project, image_index: usize) -> Self {
        let gallery: Vec<String> = project
            .images
            .iter()
            .map(|image| resolve_media_url(Some(image)))
            .collect();

        let current_image = ImageCarousel::starting_at(gallery.len(), image_index)
            .current(&gallery)
            .cloned();
        let image_count = gallery.len();

        let mut modal = DetailModal::default();
        modal.open(
            ProjectDetail {
                card: ProjectCard::from_project(project),
                long_description: project.long_description.clone(),
                all_technologies: project.technologies.clone(),
                gallery,
            },
            image_count,
        );
        modal.carousel_mut().go_to(image_index);

        Self {
            modal,
            current_image,
        }
    }
}
