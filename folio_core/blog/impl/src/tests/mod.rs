use folio_persistence_contracts::{blog::MockBlogRepository, MockDatabase, MockTransaction};

use crate::{BlogFeatureConfig, BlogFeatureServiceImpl};

mod get;
mod list;

type Sut = BlogFeatureServiceImpl<MockDatabase, MockBlogRepository<MockTransaction>>;

fn make_sut(db: MockDatabase, blog_repo: MockBlogRepository<MockTransaction>) -> Sut {
    BlogFeatureServiceImpl {
        db,
        blog_repo,
        config: BlogFeatureConfig {
            recommended_posts: 3,
        },
    }
}
