mod loading_state;
mod navigate;
mod set_loading;

pub use loading_state::{get_loading_state_handler, __path_get_loading_state_handler, LoadingStateResponse};
pub use navigate::{navigate_handler, __path_navigate_handler, NavigationRequest, NavigationResponse};
pub use set_loading::{hide_loading_handler, __path_hide_loading_handler, show_loading_handler, __path_show_loading_handler};
