use folio_core_blog_contracts::{BlogFeatureService, BlogGetError, BlogPostView};
use folio_demo::blog::{ALL_SUMMARIES, CAREER_POST, RUST_POST, WEB_POST};
use folio_models::blog::{BlogPostSlug, BlogPostSummary};
use folio_persistence_contracts::{blog::MockBlogRepository, MockDatabase};
use folio_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::tests::make_sut;
use crate::{BlogFeatureConfig, BlogFeatureServiceImpl};

#[tokio::test]
async fn ok() {
    // Arrange
    let slug = RUST_POST.slug.clone();

    let db = MockDatabase::build(false);
    let blog_repo = MockBlogRepository::new()
        .with_get_by_slug(slug.clone(), Some(RUST_POST.clone()))
        .with_list(ALL_SUMMARIES.clone());

    let sut = make_sut(db, blog_repo);

    // Act
    let result = sut.get(slug).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        BlogPostView {
            post: RUST_POST.clone(),
            recommended: vec![
                BlogPostSummary::from(CAREER_POST.clone()),
                BlogPostSummary::from(WEB_POST.clone()),
            ],
        }
    );
}

#[tokio::test]
async fn recommended_respects_limit() {
    // Arrange
    let slug = RUST_POST.slug.clone();

    let db = MockDatabase::build(false);
    let blog_repo = MockBlogRepository::new()
        .with_get_by_slug(slug.clone(), Some(RUST_POST.clone()))
        .with_list(ALL_SUMMARIES.clone());

    let sut = BlogFeatureServiceImpl {
        config: BlogFeatureConfig {
            recommended_posts: 1,
        },
        ..make_sut(db, blog_repo)
    };

    // Act
    let result = sut.get(slug).await;

    // Assert
    assert_eq!(
        result.unwrap().recommended,
        [BlogPostSummary::from(CAREER_POST.clone())]
    );
}

#[tokio::test]
async fn not_found() {
    // Arrange
    let slug: BlogPostSlug = "no-such-post".try_into().unwrap();

    let db = MockDatabase::build(false);
    let blog_repo = MockBlogRepository::new().with_get_by_slug(slug.clone(), None);

    let sut = make_sut(db, blog_repo);

    // Act
    let result = sut.get(slug).await;

    // Assert
    assert_matches!(result, Err(BlogGetError::NotFound));
}
