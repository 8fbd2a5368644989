use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use nutype::nutype;
use regex::Regex;

use crate::{macros::nutype_string, SearchTerm};

pub static BLOG_SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// A published (or draft) blog post as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: BlogPostTitle,
    pub slug: BlogPostSlug,
    pub description: BlogPostDescription,
    pub content: BlogPostContent,
    pub categories: BlogCategories,
    pub read_time: ReadTimeMinutes,
    pub cover_image: Option<CoverImagePath>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_published: bool,
}

/// The listing projection of a post (what the blog index and the JSON
/// listing endpoint expose).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPostSummary {
    pub title: BlogPostTitle,
    pub slug: BlogPostSlug,
    pub description: BlogPostDescription,
    pub categories: BlogCategories,
    pub read_time: ReadTimeMinutes,
    pub cover_image: Option<CoverImagePath>,
    pub created_at: DateTime<Utc>,
}

impl From<BlogPost> for BlogPostSummary {
    fn from(post: BlogPost) -> Self {
        Self {
            title: post.title,
            slug: post.slug,
            description: post.description,
            categories: post.categories,
            read_time: post.read_time,
            cover_image: post.cover_image,
            created_at: post.created_at,
        }
    }
}

/// Input for creating a new post. The slug is derived from the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPostCreate {
    pub title: BlogPostTitle,
    pub description: BlogPostDescription,
    pub content: BlogPostContent,
    pub categories: BlogCategories,
    pub read_time: ReadTimeMinutes,
    pub cover_image: Option<CoverImagePath>,
}

/// Listing filter. `None` in a field disables that criterion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlogFilter {
    /// Case-insensitive substring match against title or description.
    pub search: Option<SearchTerm>,
    /// Post must carry this category.
    pub category: Option<BlogCategory>,
}

#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deref,
    From,
    Serialize,
    Deserialize
))]
pub struct BlogPostId(i64);

nutype_string!(BlogPostTitle(validate(len_char_min = 1, len_char_max = 200),));
nutype_string!(BlogPostSlug(
    validate(len_char_max = 200, regex = BLOG_SLUG_REGEX),
));
nutype_string!(BlogPostDescription(
    validate(len_char_min = 1, len_char_max = 1024),
));
nutype_string!(BlogCategory(validate(len_char_min = 1, len_char_max = 64),));
nutype_string!(CoverImagePath(validate(len_char_min = 1, len_char_max = 256),));

#[nutype(
    validate(len_char_max = 65536),
    default = "",
    derive(Debug, Clone, Default, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct BlogPostContent(String);

#[nutype(
    validate(predicate = |categories| categories.len() <= 16),
    default = Vec::new(),
    derive(Debug, Clone, Default, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct BlogCategories(Vec<BlogCategory>);

impl BlogCategories {
    /// Whether any category equals `category`, ignoring ASCII case.
    pub fn contains(&self, category: &BlogCategory) -> bool {
        self.iter()
            .any(|c| c.as_str().eq_ignore_ascii_case(category.as_str()))
    }
}

#[nutype(
    validate(greater = 0, less_or_equal = 600),
    default = 5,
    derive(
        Debug,
        Clone,
        Copy,
        Default,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Deref,
        TryFrom,
        Serialize,
        Deserialize
    )
)]
pub struct ReadTimeMinutes(u32);
