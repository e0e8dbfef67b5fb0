use crate::types::Category;

/// Classifies a role: `Board` iff `role` contains `marker`, else `Employee`.
pub fn classify_category(role: &str, marker: &str) -> Category {
    if role.contains(marker) {
        Category::Board
    } else {
        Category::Employee
    }
}
