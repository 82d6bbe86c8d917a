mod get_project_by_id;
mod get_services;

pub use get_project_by_id::{GetProjectByIdError, GetProjectByIdUseCase};
pub use get_services::{GetServicesError, GetServicesUseCase};
