//! List all categories from the primary source

use std::sync::Arc;

use crate::domain::{Category, CategoryReader};
use crate::error::Result;

#[derive(Debug)]
pub struct ListCategoriesOutput {
    pub categories: Vec<Category>,
}

/// Category listing; unpaginated, the catalog is small.
#[derive(Clone)]
pub struct ListCategories {
    source: Arc<dyn CategoryReader>,
}

impl ListCategories {
    pub fn new(source: Arc<dyn CategoryReader>) -> Self {
        Self { source }
    }

    pub async fn execute(&self) -> Result<ListCategoriesOutput> {
        let categories = self.source.categories().await?;

        Ok(ListCategoriesOutput { categories })
    }
}
