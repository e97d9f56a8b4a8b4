//! Shared application state
//!
//! All wiring happens here, once, at startup: sources are built from
//! configuration and handed to the usecases behind `Arc`. Nothing in the
//! state is mutated after construction; concurrent requests share only this
//! immutable graph.

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::sources::{MicroCmsArticleSource, MicroCmsCategorySource, MicroCmsClient, ZennArticleSource};
use crate::usecase::{
    ArticlesByCategory, GetArticle, LatestArticles, ListArticles, ListCategories,
    PopularArticles, ZennArticles,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub list_articles: ListArticles,
    pub get_article: GetArticle,
    pub popular_articles: PopularArticles,
    pub latest_articles: LatestArticles,
    pub articles_by_category: ArticlesByCategory,
    pub list_categories: ListCategories,
    pub zenn_articles: ZennArticles,
}

impl AppState {
    /// Wire sources and usecases from configuration.
    pub fn new(config: Config) -> Result<Self> {
        let cms = MicroCmsClient::new(&config.microcms)?;
        let articles = Arc::new(MicroCmsArticleSource::new(cms.clone()));
        let categories = Arc::new(MicroCmsCategorySource::new(cms));
        let zenn = Arc::new(ZennArticleSource::new(&config.zenn)?);

        Ok(Self {
            list_articles: ListArticles::new(articles.clone()),
            get_article: GetArticle::new(articles.clone()),
            popular_articles: PopularArticles::new(articles.clone()),
            latest_articles: LatestArticles::new(articles.clone()),
            articles_by_category: ArticlesByCategory::new(articles),
            list_categories: ListCategories::new(categories),
            zenn_articles: ZennArticles::new(zenn),
            config: Arc::new(config),
        })
    }
}
