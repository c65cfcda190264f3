use crate::dto::categories::CategoriesResponse;

/// The closed set of category names the service advertises. Membership is
/// fixed at build time; there is no taxonomy management surface.
pub const ALLOWED_CATEGORIES: [&str; 5] =
    ["Accessories", "Bags", "Balls", "Clothing", "Rackets"];

pub fn list_categories() -> CategoriesResponse {
    CategoriesResponse {
        allowed_categories: ALLOWED_CATEGORIES.iter().map(|c| c.to_string()).collect(),
    }
}
