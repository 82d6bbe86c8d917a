use serde::Serialize;
use utoipa::ToSchema;

use super::social::{contact_social_links, SocialLinkView};
use crate::modules::portfolio::application::aggregator::{AggregatorStatus, PortfolioView};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ContactView {
    pub status: AggregatorStatus,
    pub email: Option<String>,
    pub social_links: Vec<SocialLinkView>,
}

impl ContactView {
    pub fn build(view: &PortfolioView) -> Self {
        let snapshot = &view.snapshot;

        Self {
            status: view.status.clone(),
            email: snapshot
                .profile
                .as_ref()
                .map(|p| p.email.clone())
                .filter(|email| !email.trim().is_empty()),
            social_links: contact_social_links(&snapshot.social_links),
        }
    }
}
