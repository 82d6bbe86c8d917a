use crate::modules::portfolio::adapter::outgoing::PortfolioDataset;
use crate::modules::portfolio::application::domain::entities::{
    Project, ProjectType, Skill, SocialLink,
};

pub fn sample_dataset() -> PortfolioDataset {
    PortfolioDataset::embedded().expect("embedded fixture must parse")
}

pub fn sample_project(id: i64, category: &str) -> Project {
    Project {
        id,
        title: format!("Project {id}"),
        description: "A sample project".to_string(),
        long_description: None,
        problem: None,
        technologies: vec!["Rust".to_string()],
        images: vec![],
        image: None,
        category: Some(category.to_string()),
        project_type: ProjectType::Individual,
        demo_url: None,
        github_url: None,
        figma_url: None,
        year: Some(2024),
        created_at: None,
        display_order: Some(id),
    }
}

pub fn sample_skill(id: i64, name: &str, category: &str) -> Skill {
    Skill {
        id,
        name: name.to_string(),
        category: category.to_string(),
        display_order: Some(id),
    }
}

pub fn sample_social_link(id: i64, platform: &str, icon: Option<&str>) -> SocialLink {
    SocialLink {
        id,
        platform: platform.to_string(),
        icon: icon.map(str::to_string),
        url: format!("https://example.com/{}", platform.to_lowercase()),
        display_order: Some(id),
    }
}
