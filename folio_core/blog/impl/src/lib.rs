use folio_core_blog_contracts::{
    BlogCreateError, BlogFeatureService, BlogGetError, BlogPostView,
};
use folio_models::blog::{
    BlogFilter, BlogPostCreate, BlogPostId, BlogPostSlug, BlogPostSummary,
};
use folio_persistence_contracts::{
    blog::{BlogRepoError, BlogRepository},
    Database, Transaction,
};
use tracing::info;

mod slug;

pub use slug::slugify;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct BlogFeatureServiceImpl<Db, BlogRepo> {
    db: Db,
    blog_repo: BlogRepo,
    config: BlogFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct BlogFeatureConfig {
    /// How many recommended posts to return next to a post.
    pub recommended_posts: usize,
}

impl<Db, BlogRepo> BlogFeatureServiceImpl<Db, BlogRepo> {
    pub fn new(db: Db, blog_repo: BlogRepo, config: BlogFeatureConfig) -> Self {
        Self {
            db,
            blog_repo,
            config,
        }
    }
}

impl<Db, BlogRepo> BlogFeatureService for BlogFeatureServiceImpl<Db, BlogRepo>
where
    Db: Database,
    BlogRepo: BlogRepository<Db::Transaction>,
{
    async fn list(&self, filter: BlogFilter) -> anyhow::Result<Vec<BlogPostSummary>> {
        let mut txn = self.db.begin_transaction().await?;

        let posts = self.blog_repo.list(&mut txn).await?;

        Ok(apply_filter(posts, &filter))
    }

    async fn get(&self, slug: BlogPostSlug) -> Result<BlogPostView, BlogGetError> {
        let mut txn = self.db.begin_transaction().await?;

        let post = self
            .blog_repo
            .get_by_slug(&mut txn, &slug)
            .await?
            .ok_or(BlogGetError::NotFound)?;

        let recommended = self
            .blog_repo
            .list(&mut txn)
            .await?
            .into_iter()
            .filter(|x| x.slug != post.slug)
            .take(self.config.recommended_posts)
            .collect();

        Ok(BlogPostView { post, recommended })
    }

    async fn create(
        &self,
        create: BlogPostCreate,
    ) -> Result<(BlogPostId, BlogPostSlug), BlogCreateError> {
        let slug = slugify(&create.title);

        let mut txn = self.db.begin_transaction().await?;

        let id = self
            .blog_repo
            .create(&mut txn, &slug, &create)
            .await
            .map_err(|err| match err {
                BlogRepoError::SlugConflict => BlogCreateError::SlugConflict(slug.clone()),
                BlogRepoError::Other(err) => err.into(),
            })?;
        txn.commit().await?;

        info!(id = *id, slug = slug.as_str(), "blog post created");

        Ok((id, slug))
    }
}

/// Applies the listing filter the same way the blog page narrows its
/// cards: search matches title or description case-insensitively,
/// category must be carried by the post.
fn apply_filter(posts: Vec<BlogPostSummary>, filter: &BlogFilter) -> Vec<BlogPostSummary> {
    posts
        .into_iter()
        .filter(|post| {
            filter.search.as_ref().is_none_or(|search| {
                let needle = search.to_lowercase();
                post.title.to_lowercase().contains(&needle)
                    || post.description.to_lowercase().contains(&needle)
            })
        })
        .filter(|post| {
            filter
                .category
                .as_ref()
                .is_none_or(|category| post.categories.contains(category))
        })
        .collect()
}
