use folio_models::blog::{BlogPost, BlogPostSummary};
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = stringify!($ident);
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    IndexTemplate("index.html"),
    AchievementsTemplate("achievements.html"),
    ResumeTemplate("resume.html"),
    ProjectsTemplate("projects.html"),
    ContactTemplate("contact.html"),
    BlogListTemplate("blog_list.html"),
    BlogDetailTemplate("blog_detail.html"),
}

/// Site metadata shared by every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteContext {
    pub title: String,
    pub author: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexTemplate {
    pub site: SiteContext,
    pub active_page: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementsTemplate {
    pub site: SiteContext,
    pub active_page: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeTemplate {
    pub site: SiteContext,
    pub active_page: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectsTemplate {
    pub site: SiteContext,
    pub active_page: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactTemplate {
    pub site: SiteContext,
    pub active_page: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogListTemplate {
    pub site: SiteContext,
    pub active_page: String,
    pub posts: Vec<BlogPostCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogDetailTemplate {
    pub site: SiteContext,
    pub active_page: String,
    pub post: BlogPostArticle,
    pub recommended: Vec<BlogPostCard>,
}

/// The card shown on the blog listing page and in the recommended rail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPostCard {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub categories: Vec<String>,
    pub read_time: u32,
    pub cover_image: Option<String>,
    pub created_at: String,
}

impl From<BlogPostSummary> for BlogPostCard {
    fn from(summary: BlogPostSummary) -> Self {
        Self {
            title: summary.title.into_inner(),
            slug: summary.slug.into_inner(),
            description: summary.description.into_inner(),
            categories: summary
                .categories
                .into_inner()
                .into_iter()
                .map(|x| x.into_inner())
                .collect(),
            read_time: *summary.read_time,
            cover_image: summary.cover_image.map(|x| x.into_inner()),
            created_at: format_date(summary.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPostArticle {
    pub title: String,
    pub content: String,
    pub categories: Vec<String>,
    pub read_time: u32,
    pub created_at: String,
}

impl From<BlogPost> for BlogPostArticle {
    fn from(post: BlogPost) -> Self {
        Self {
            title: post.title.into_inner(),
            content: post.content.into_inner(),
            categories: post
                .categories
                .into_inner()
                .into_iter()
                .map(|x| x.into_inner())
                .collect(),
            read_time: *post.read_time,
            created_at: format_date(post.created_at),
        }
    }
}

fn format_date(date: chrono::DateTime<chrono::Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn format_date_long_form() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 13, 37, 0).unwrap();
        assert_eq!(format_date(date), "March 5, 2024");
    }
}
