use anyhow::Context;
use bb8_postgres::tokio_postgres::{self, Row};
use folio_models::blog::{
    BlogCategories, BlogPost, BlogPostCreate, BlogPostId, BlogPostSlug, BlogPostSummary,
};
use folio_persistence_contracts::blog::{BlogRepoError, BlogRepository};

use crate::{arg_indices, columns, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresBlogRepository;

columns!(post as "b": "id", "title", "slug", "description", "content", "categories", "read_time", "cover_image", "created_at", "updated_at", "is_published");
columns!(summary as "b": "title", "slug", "description", "categories", "read_time", "cover_image", "created_at");

impl BlogRepository<PostgresTransaction> for PostgresBlogRepository {
    async fn list(&self, txn: &mut PostgresTransaction) -> anyhow::Result<Vec<BlogPostSummary>> {
        txn.txn()
            .query(
                &format!(
                    "select {SUMMARY_COLS} from blog_posts b where b.is_published order by \
                     b.created_at desc"
                ),
                &[],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_summary(&row, &mut 0))
                    .collect()
            })
    }

    async fn get_by_slug(
        &self,
        txn: &mut PostgresTransaction,
        slug: &BlogPostSlug,
    ) -> anyhow::Result<Option<BlogPost>> {
        txn.txn()
            .query_opt(
                &format!(
                    "select {POST_COLS} from blog_posts b where b.slug=$1 and b.is_published"
                ),
                &[&slug.as_str()],
            )
            .await
            .map_err(Into::into)
            .and_then(|row| row.map(|row| decode_post(&row, &mut 0)).transpose())
    }

    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        slug: &BlogPostSlug,
        post: &BlogPostCreate,
    ) -> Result<BlogPostId, BlogRepoError> {
        txn.txn()
            .query_one(
                &format!(
                    "insert into blog_posts (title, slug, description, content, categories, \
                     read_time, cover_image) values ({}) returning id",
                    arg_indices(1..=7)
                ),
                &[
                    &post.title.as_str(),
                    &slug.as_str(),
                    &post.description.as_str(),
                    &post.content.as_str(),
                    &encode_categories(&post.categories),
                    &(*post.read_time as i32),
                    &post.cover_image.as_ref().map(|x| x.as_str()),
                ],
            )
            .await
            .map(|row| row.get::<_, i64>(0).into())
            .map_err(map_blog_repo_error)
    }
}

fn encode_categories(categories: &BlogCategories) -> String {
    categories
        .iter()
        .map(|x| x.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn decode_categories(raw: &str) -> anyhow::Result<BlogCategories> {
    raw.split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(|x| x.to_owned().try_into().map_err(Into::into))
        .collect::<anyhow::Result<Vec<_>>>()
        .and_then(|x| x.try_into().map_err(Into::into))
        .context("Failed to decode categories")
}

fn decode_summary(row: &Row, offset: &mut usize) -> anyhow::Result<BlogPostSummary> {
    let mut idx = || {
        *offset += 1;
        *offset - 1
    };

    Ok(BlogPostSummary {
        title: row.get::<_, String>(idx()).try_into()?,
        slug: row.get::<_, String>(idx()).try_into()?,
        description: row.get::<_, String>(idx()).try_into()?,
        categories: decode_categories(row.get(idx()))?,
        read_time: u32::try_from(row.get::<_, i32>(idx()))?.try_into()?,
        cover_image: row
            .get::<_, Option<String>>(idx())
            .map(TryInto::try_into)
            .transpose()?,
        created_at: row.get(idx()),
    })
}

fn decode_post(row: &Row, offset: &mut usize) -> anyhow::Result<BlogPost> {
    let mut idx = || {
        *offset += 1;
        *offset - 1
    };

    Ok(BlogPost {
        id: row.get::<_, i64>(idx()).into(),
        title: row.get::<_, String>(idx()).try_into()?,
        slug: row.get::<_, String>(idx()).try_into()?,
        description: row.get::<_, String>(idx()).try_into()?,
        content: row.get::<_, String>(idx()).try_into()?,
        categories: decode_categories(row.get(idx()))?,
        read_time: u32::try_from(row.get::<_, i32>(idx()))?.try_into()?,
        cover_image: row
            .get::<_, Option<String>>(idx())
            .map(TryInto::try_into)
            .transpose()?,
        created_at: row.get(idx()),
        updated_at: row.get(idx()),
        is_published: row.get(idx()),
    })
}

fn map_blog_repo_error(err: tokio_postgres::Error) -> BlogRepoError {
    match err.as_db_error() {
        Some(err) if err.constraint() == Some("blog_posts_slug_key") => BlogRepoError::SlugConflict,
        _ => BlogRepoError::Other(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_roundtrip() {
        let categories: BlogCategories = vec![
            "Web".to_owned().try_into().unwrap(),
            "Rust".to_owned().try_into().unwrap(),
        ]
        .try_into()
        .unwrap();

        let encoded = encode_categories(&categories);
        assert_eq!(encoded, "Web, Rust");
        assert_eq!(decode_categories(&encoded).unwrap(), categories);
    }

    #[test]
    fn decode_categories_tolerates_blanks() {
        assert_eq!(
            decode_categories("").unwrap(),
            BlogCategories::try_new(Vec::new()).unwrap()
        );
        assert_eq!(
            decode_categories(" Web ,, Rust ").unwrap(),
            BlogCategories::try_new(vec![
                "Web".to_owned().try_into().unwrap(),
                "Rust".to_owned().try_into().unwrap(),
            ])
            .unwrap()
        );
    }
}
