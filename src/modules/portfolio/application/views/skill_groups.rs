use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::portfolio::application::domain::entities::{EntityId, Skill};
use crate::modules::skill::application::domain::{
    resolve_icon, sort_skill_category_entries, SkillIcon,
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillBadge {
    pub id: EntityId,
    pub name: String,
    pub icon: SkillIcon,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<SkillBadge>,
}

/// Groups by exact category label in first-appearance order, then orders the
/// groups by the category priority list.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup> {
    let mut groups: Vec<(String, Vec<SkillBadge>)> = Vec::new();

    for skill in skills {
        let badge = SkillBadge {
            id: skill.id,
            name: skill.name.clone(),
            icon: resolve_icon(&skill.name, &skill.category),
        };

        match groups.iter_mut().find(|(category, _)| *category == skill.category) {
            Some((_, badges)) => badges.push(badge),
            None => groups.push((skill.category.clone(), vec![badge])),
        }
    }

    sort_skill_category_entries(groups)
        .into_iter()
        .map(|(category, skills)| SkillGroup { category, skills })
        .collect()
}
