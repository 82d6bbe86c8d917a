mod get_about;
mod get_contact;
mod get_home;
mod get_portfolio;
mod get_projects;
mod get_services;
mod get_single_project;
mod refresh_portfolio;

pub use get_about::{get_about_handler, __path_get_about_handler};
pub use get_contact::{get_contact_handler, __path_get_contact_handler};
pub use get_home::{get_home_handler, __path_get_home_handler};
pub use get_portfolio::{get_portfolio_handler, __path_get_portfolio_handler, PortfolioResponse};
pub use get_projects::{get_projects_handler, __path_get_projects_handler, ProjectsQuery};
pub use get_services::{get_services_handler, __path_get_services_handler};
pub use get_single_project::{get_single_project_handler, __path_get_single_project_handler, ProjectDetailQuery};
pub use refresh_portfolio::{refresh_portfolio_handler, __path_refresh_portfolio_handler};
