//! Clients for the two upstream content APIs

pub mod microcms;
pub mod zenn;

pub use microcms::{MicroCmsArticleSource, MicroCmsCategorySource, MicroCmsClient};
pub use zenn::ZennArticleSource;
