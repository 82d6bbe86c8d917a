use super::entities::{
    Achievement, Certification, Education, Experience, Project, Service, Skill, SocialLink,
};

/// Collections the aggregator orders before exposing them.
pub trait DisplayOrdered {
    fn display_order(&self) -> Option<i64>;
}

macro_rules! impl_display_ordered {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DisplayOrdered for $ty {
                fn display_order(&self) -> Option<i64> {
                    self.display_order
                }
            }
        )*
    };
}

impl_display_ordered!(
    Project,
    Skill,
    Experience,
    Education,
    Certification,
    Achievement,
    Service,
    SocialLink,
);

/// Ascending by `display_order`, missing treated as 0. Ties keep their input order.
pub fn sort_by_display_order<T: DisplayOrdered>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by_key(|item| item.display_order().unwrap_or(0));
    items
}
