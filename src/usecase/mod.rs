//! Read operations composing the pagination policy with the content sources
//!
//! Each operation is a single-pass pipeline: clamp inputs, optionally fetch
//! a total count, fetch the records, attach pagination when the endpoint is
//! paginated. Upstream failures propagate unchanged; there is no retry and
//! no partial result.

pub mod articles_by_category;
pub mod get_article;
pub mod latest_articles;
pub mod list_articles;
pub mod list_categories;
pub mod popular_articles;
pub mod zenn_articles;

pub use articles_by_category::{
    ArticlesByCategory, ArticlesByCategoryInput, ArticlesByCategoryOutput,
};
pub use get_article::{GetArticle, GetArticleInput, GetArticleOutput};
pub use latest_articles::{LatestArticles, LatestArticlesInput, LatestArticlesOutput};
pub use list_articles::{ListArticles, ListArticlesInput, ListArticlesOutput};
pub use list_categories::{ListCategories, ListCategoriesOutput};
pub use popular_articles::{PopularArticles, PopularArticlesInput, PopularArticlesOutput};
pub use zenn_articles::{ZennArticles, ZennArticlesInput, ZennArticlesOutput};
