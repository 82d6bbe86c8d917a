pub mod about_view;
pub mod carousel;
pub mod contact_view;
pub mod home_view;
pub mod pagination;
pub mod project_filter;
pub mod projects_view;
pub mod skill_groups;
pub mod social;
pub mod timeline;

pub use about_view::{AboutQuery, AboutView};
pub use carousel::{DetailModal, ImageCarousel};
pub use contact_view::ContactView;
pub use home_view::{HomeView, ServiceCard};
pub use pagination::Pager;
pub use projects_view::{ProjectDetailView, ProjectsView};
