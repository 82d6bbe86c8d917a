use crate::modules::portfolio::application::domain::entities::Project;

pub const ALL_PROJECTS: &str = "All";

/// Filter tabs shown above the project gallery.
pub const PROJECT_FILTERS: [&str; 4] = [
    ALL_PROJECTS,
    "UI/UX Design",
    "Web Development",
    "Visual Content Design",
];

/// `All` (or no filter) keeps everything; anything else is an exact category match.
pub fn filter_projects<'a>(projects: &'a [Project], filter: Option<&str>) -> Vec<&'a Project> {
    match filter {
        None | Some(ALL_PROJECTS) => projects.iter().collect(),
        Some(category) => projects
            .iter()
            .filter(|p| p.category.as_deref() == Some(category))
            .collect(),
    }
}
