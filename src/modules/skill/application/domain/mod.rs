pub mod category_order;
pub mod icon;

pub use category_order::{compare_skill_categories, sort_skill_category_entries, SKILL_CATEGORY_ORDER};
pub use icon::{available_icon_keys, resolve_icon, SkillIcon};
