pub mod display_order;
pub mod entities;
pub mod snapshot;

pub use display_order::{sort_by_display_order, DisplayOrdered};
pub use entities::{
    Achievement, Certification, Education, Experience, Profile, Project, ProjectType, Service,
    Skill, SocialLink,
};
pub use snapshot::PortfolioSnapshot;
