use std::cmp::Ordering;

/// Display priority of skill categories on the About page.
pub const SKILL_CATEGORY_ORDER: [&str; 9] = [
    "Frontend",
    "Backend",
    "Database",
    "Programming",
    "Tools",
    "DevOps",
    "Mobile",
    "Design",
    "Cloud",
];

fn priority(category: &str) -> Option<usize> {
    let key = category.trim();
    SKILL_CATEGORY_ORDER
        .iter()
        .position(|known| known.eq_ignore_ascii_case(key))
}

/// Alphabetical, case-insensitive first. On a case-only difference the
/// lowercase form sorts first, like `localeCompare`.
fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Listed categories by priority, unknown ones after all of them.
pub fn compare_skill_categories(a: &str, b: &str) -> Ordering {
    match (priority(a), priority(b)) {
        (Some(x), Some(y)) if x != y => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => locale_compare(a, b),
    }
}

/// Stable sort of `(category, items)` pairs by category.
pub fn sort_skill_category_entries<T>(mut entries: Vec<(String, T)>) -> Vec<(String, T)> {
    entries.sort_by(|(a, _), (b, _)| compare_skill_categories(a, b));
    entries
}
