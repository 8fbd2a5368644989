use std::future::Future;

use folio_models::blog::{
    BlogFilter, BlogPost, BlogPostCreate, BlogPostId, BlogPostSlug, BlogPostSummary,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait BlogFeatureService: Send + Sync + 'static {
    /// Returns the summaries of all published posts matching the filter,
    /// newest first.
    fn list(
        &self,
        filter: BlogFilter,
    ) -> impl Future<Output = anyhow::Result<Vec<BlogPostSummary>>> + Send;

    /// Returns the published post with the given slug together with the
    /// posts recommended next to it.
    fn get(
        &self,
        slug: BlogPostSlug,
    ) -> impl Future<Output = Result<BlogPostView, BlogGetError>> + Send;

    /// Creates a new post. The slug is derived from the title.
    fn create(
        &self,
        create: BlogPostCreate,
    ) -> impl Future<Output = Result<(BlogPostId, BlogPostSlug), BlogCreateError>> + Send;
}

/// A post plus the recommended posts shown beside it (the latest
/// published posts, the post itself excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPostView {
    pub post: BlogPost,
    pub recommended: Vec<BlogPostSummary>,
}

#[derive(Debug, Error)]
pub enum BlogGetError {
    #[error("The blog post does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BlogCreateError {
    #[error("A blog post with the same slug already exists.")]
    SlugConflict(BlogPostSlug),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockBlogFeatureService {
    pub fn with_list(mut self, filter: BlogFilter, result: Vec<BlogPostSummary>) -> Self {
        self.expect_list()
            .once()
            .with(mockall::predicate::eq(filter))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get(mut self, slug: BlogPostSlug, result: Result<BlogPostView, BlogGetError>) -> Self {
        self.expect_get()
            .once()
            .with(mockall::predicate::eq(slug))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
