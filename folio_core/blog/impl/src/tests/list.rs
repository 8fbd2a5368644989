use folio_core_blog_contracts::BlogFeatureService;
use folio_demo::blog::{ALL_SUMMARIES, CAREER_POST, RUST_POST, WEB_POST};
use folio_models::blog::{BlogFilter, BlogPostSummary};
use folio_persistence_contracts::{blog::MockBlogRepository, MockDatabase};
use pretty_assertions::assert_eq;

use crate::tests::make_sut;

#[tokio::test]
async fn unfiltered() {
    // Arrange
    let db = MockDatabase::build(false);
    let blog_repo = MockBlogRepository::new().with_list(ALL_SUMMARIES.clone());

    let sut = make_sut(db, blog_repo);

    // Act
    let result = sut.list(BlogFilter::default()).await;

    // Assert
    assert_eq!(result.unwrap(), *ALL_SUMMARIES);
}

#[tokio::test]
async fn search_matches_title() {
    // Arrange
    let db = MockDatabase::build(false);
    let blog_repo = MockBlogRepository::new().with_list(ALL_SUMMARIES.clone());

    let sut = make_sut(db, blog_repo);

    // Act
    let result = sut
        .list(BlogFilter {
            search: Some("RUST".try_into().unwrap()),
            category: None,
        })
        .await;

    // Assert
    assert_eq!(
        result.unwrap(),
        [BlogPostSummary::from(RUST_POST.clone())]
    );
}

#[tokio::test]
async fn search_matches_description() {
    // Arrange
    let db = MockDatabase::build(false);
    let blog_repo = MockBlogRepository::new().with_list(ALL_SUMMARIES.clone());

    let sut = make_sut(db, blog_repo);

    // Act
    let result = sut
        .list(BlogFilter {
            search: Some("flexbox".try_into().unwrap()),
            category: None,
        })
        .await;

    // Assert
    assert_eq!(result.unwrap(), [BlogPostSummary::from(WEB_POST.clone())]);
}

#[tokio::test]
async fn category_filter() {
    // Arrange
    let db = MockDatabase::build(false);
    let blog_repo = MockBlogRepository::new().with_list(ALL_SUMMARIES.clone());

    let sut = make_sut(db, blog_repo);

    // Act
    let result = sut
        .list(BlogFilter {
            search: None,
            category: Some("web".try_into().unwrap()),
        })
        .await;

    // Assert
    assert_eq!(
        result.unwrap(),
        [
            BlogPostSummary::from(CAREER_POST.clone()),
            BlogPostSummary::from(WEB_POST.clone()),
        ]
    );
}

#[tokio::test]
async fn no_match() {
    // Arrange
    let db = MockDatabase::build(false);
    let blog_repo = MockBlogRepository::new().with_list(ALL_SUMMARIES.clone());

    let sut = make_sut(db, blog_repo);

    // Act
    let result = sut
        .list(BlogFilter {
            search: Some("quantum chromodynamics".try_into().unwrap()),
            category: None,
        })
        .await;

    // Assert
    assert!(result.unwrap().is_empty());
}
