use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::models::category::Category;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

/// Collapses category rows into the `{id: label}` object the frontend expects.
pub fn categories_map(categories: Vec<Category>) -> BTreeMap<i32, String> {
    categories
        .into_iter()
        .map(|category| (category.id, category.category_type))
        .collect()
}

impl From<Vec<Category>> for CategoryListResponse {
    fn from(value: Vec<Category>) -> Self {
        Self {
            success: true,
            categories: categories_map(value),
        }
    }
}
