pub mod app_state_builder;
pub mod portfolio_fixtures;
pub mod stubs;
