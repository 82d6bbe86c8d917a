use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::modules::contact::adapter::incoming::web::routes::ContactMessageRequest;
use crate::modules::contact::application::domain::ContactReceipt;
use crate::modules::navigation::adapter::incoming::web::routes::{
    LoadingStateResponse, NavigationRequest, NavigationResponse,
};
use crate::modules::portfolio::adapter::incoming::web::routes::PortfolioResponse;
use crate::modules::portfolio::application::aggregator::AggregatorStatus;
use crate::modules::portfolio::application::views::{
    AboutView, ContactView, HomeView, Pager, ProjectDetailView, ProjectsView, ServiceCard,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read-only portfolio pages, page-loader state and the contact form",
    ),
    paths(
        // Portfolio
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::refresh_portfolio_handler,

        // Pages
        crate::modules::portfolio::adapter::incoming::web::routes::get_home_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_about_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_single_project_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_services_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_contact_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_message_handler,

        // Navigation
        crate::modules::navigation::adapter::incoming::web::routes::navigate_handler,
        crate::modules::navigation::adapter::incoming::web::routes::get_loading_state_handler,
        crate::modules::navigation::adapter::incoming::web::routes::show_loading_handler,
        crate::modules::navigation::adapter::incoming::web::routes::hide_loading_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            AggregatorStatus,
            PortfolioResponse,
            HomeView,
            AboutView,
            ProjectsView,
            ProjectDetailView,
            ServiceCard,
            ContactView,
            Pager,
            ContactMessageRequest,
            ContactReceipt,
            NavigationRequest,
            NavigationResponse,
            LoadingStateResponse,
        )
    ),
    tags(
        (name = "portfolio", description = "Aggregated portfolio snapshot"),
        (name = "pages", description = "Derived state for each portfolio page"),
        (name = "contact", description = "Contact form"),
        (name = "navigation", description = "Page-loader state driven by navigation"),
    )
)]
pub struct ApiDoc;
