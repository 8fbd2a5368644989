use chrono::{DateTime, Utc};
use folio_models::{
    blog::{
        BlogCategory, BlogFilter, BlogPostDescription, BlogPostSlug, BlogPostSummary,
        BlogPostTitle, CoverImagePath, ReadTimeMinutes,
    },
    SearchTerm,
};
use serde::{Deserialize, Serialize};

/// One entry of the JSON listing endpoint. Categories are exposed as the
/// comma-separated string the cards carry in their `data-categories`
/// attribute.
#[derive(Debug, Clone, Serialize)]
pub struct ApiBlogPostSummary {
    pub title: BlogPostTitle,
    pub slug: BlogPostSlug,
    pub description: BlogPostDescription,
    pub categories: String,
    pub read_time: ReadTimeMinutes,
    pub cover_image: Option<CoverImagePath>,
    pub created_at: DateTime<Utc>,
}

impl From<BlogPostSummary> for ApiBlogPostSummary {
    fn from(summary: BlogPostSummary) -> Self {
        Self {
            title: summary.title,
            slug: summary.slug,
            description: summary.description,
            categories: summary
                .categories
                .iter()
                .map(|x| x.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            read_time: summary.read_time,
            cover_image: summary.cover_image,
            created_at: summary.created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiBlogFilter {
    pub search: Option<SearchTerm>,
    pub category: Option<BlogCategory>,
}

impl From<ApiBlogFilter> for BlogFilter {
    fn from(value: ApiBlogFilter) -> Self {
        Self {
            search: value.search,
            category: value.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn summary_shape() {
        let summary = ApiBlogPostSummary {
            title: "Getting Started with Rust".try_into().unwrap(),
            slug: "getting-started-with-rust".try_into().unwrap(),
            description: "A tour.".try_into().unwrap(),
            categories: "Rust, Tutorial".into(),
            read_time: 7.try_into().unwrap(),
            cover_image: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap(),
        };

        assert_eq!(
            serde_json::to_value(summary).unwrap(),
            json!({
                "title": "Getting Started with Rust",
                "slug": "getting-started-with-rust",
                "description": "A tour.",
                "categories": "Rust, Tutorial",
                "read_time": 7,
                "cover_image": null,
                "created_at": "2024-01-05T09:30:00Z",
            })
        );
    }
}
