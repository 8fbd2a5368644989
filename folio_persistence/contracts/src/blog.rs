use std::future::Future;

use folio_models::blog::{BlogPost, BlogPostCreate, BlogPostId, BlogPostSlug, BlogPostSummary};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait BlogRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns the summaries of all published posts, newest first.
    fn list(
        &self,
        txn: &mut Txn,
    ) -> impl Future<Output = anyhow::Result<Vec<BlogPostSummary>>> + Send;

    /// Returns the published post with the given slug.
    fn get_by_slug(
        &self,
        txn: &mut Txn,
        slug: &BlogPostSlug,
    ) -> impl Future<Output = anyhow::Result<Option<BlogPost>>> + Send;

    /// Creates a new published post under the given slug.
    ///
    /// Returns an error if a post with the same slug already exists
    /// (published or not).
    fn create(
        &self,
        txn: &mut Txn,
        slug: &BlogPostSlug,
        post: &BlogPostCreate,
    ) -> impl Future<Output = Result<BlogPostId, BlogRepoError>> + Send;
}

#[derive(Debug, Error)]
pub enum BlogRepoError {
    #[error("A blog post with the same slug already exists.")]
    SlugConflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockBlogRepository<Txn> {
    pub fn with_list(mut self, result: Vec<BlogPostSummary>) -> Self {
        self.expect_list()
            .once()
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_by_slug(mut self, slug: BlogPostSlug, result: Option<BlogPost>) -> Self {
        self.expect_get_by_slug()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(slug))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_create(
        mut self,
        slug: BlogPostSlug,
        post: BlogPostCreate,
        result: Result<BlogPostId, BlogRepoError>,
    ) -> Self {
        self.expect_create()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(slug),
                mockall::predicate::eq(post),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(result)));
        self
    }
}
