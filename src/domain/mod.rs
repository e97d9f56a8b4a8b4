//! Domain entities and the capability contracts the content sources implement

pub mod article;
pub mod source;

pub use article::{Article, Category};
pub use source::{ArticleCatalog, ArticleReader, CategoryReader};
