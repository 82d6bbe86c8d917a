use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::portfolio::application::domain::entities::{EntityId, SocialLink};
use crate::modules::skill::application::domain::{resolve_icon, SkillIcon};

/// Platforms left out of the hero strip.
const HERO_EXCLUDED_PLATFORMS: [&str; 2] = ["Instagram", "Email"];

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SocialLinkView {
    pub id: EntityId,
    pub platform: String,
    pub url: String,
    pub icon: SkillIcon,
}

impl SocialLinkView {
    fn from_link(link: &SocialLink) -> Self {
        let icon_name = link
            .icon
            .as_deref()
            .filter(|icon| !icon.trim().is_empty())
            .unwrap_or(&link.platform);

        Self {
            id: link.id,
            platform: link.platform.clone(),
            url: link.url.clone(),
            icon: resolve_icon(icon_name, "tools"),
        }
    }
}

/// Hero strip on the home page: everything except Instagram and Email.
pub fn hero_social_links(links: &[SocialLink]) -> Vec<SocialLinkView> {
    links
        .iter()
        .filter(|link| !HERO_EXCLUDED_PLATFORMS.contains(&link.platform.as_str()))
        .map(SocialLinkView::from_link)
        .collect()
}

/// Contact page list: everything except the email entry.
pub fn contact_social_links(links: &[SocialLink]) -> Vec<SocialLinkView> {
    links
        .iter()
        .filter(|link| !link.is_email())
        .map(SocialLinkView::from_link)
        .collect()
}
