use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_blog_contracts::{BlogFeatureService, BlogGetError, BlogPostView};
use folio_models::blog::BlogPostSlug;
use folio_templates_contracts::{BlogDetailTemplate, BlogListTemplate, SiteContext, TemplateService};

use super::{internal_server_error, pages::render_page};
use crate::models::blog::{ApiBlogFilter, ApiBlogPostSummary};

pub fn router(
    service: Arc<impl BlogFeatureService>,
    templates: Arc<impl TemplateService>,
    site: SiteContext,
) -> Router<()> {
    Router::new()
        .route("/blog", routing::get(list_page))
        .route("/blog/api", routing::get(list_api))
        .route("/blog/:slug", routing::get(detail_page))
        .with_state((service, templates, site))
}

type BlogState<B, T> = State<(Arc<B>, Arc<T>, SiteContext)>;

async fn list_page<B: BlogFeatureService, T: TemplateService>(
    State((service, templates, site)): BlogState<B, T>,
    Query(filter): Query<ApiBlogFilter>,
) -> Response {
    match service.list(filter.into()).await {
        Ok(posts) => render_page(
            &*templates,
            &BlogListTemplate {
                site,
                active_page: "blog".into(),
                posts: posts.into_iter().map(Into::into).collect(),
            },
        ),
        Err(err) => internal_server_error(err),
    }
}

async fn list_api<B: BlogFeatureService, T: TemplateService>(
    State((service, _, _)): BlogState<B, T>,
    Query(filter): Query<ApiBlogFilter>,
) -> Response {
    match service.list(filter.into()).await {
        Ok(posts) => Json(
            posts
                .into_iter()
                .map(ApiBlogPostSummary::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(err) => {
            tracing::error!("failed to list blog posts: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Database error"})),
            )
                .into_response()
        }
    }
}

async fn detail_page<B: BlogFeatureService, T: TemplateService>(
    State((service, templates, site)): BlogState<B, T>,
    Path(slug): Path<String>,
) -> Response {
    let Ok(slug) = BlogPostSlug::try_new(slug) else {
        return not_found();
    };

    match service.get(slug).await {
        Ok(BlogPostView { post, recommended }) => render_page(
            &*templates,
            &BlogDetailTemplate {
                site,
                active_page: "blog".into(),
                post: post.into(),
                recommended: recommended.into_iter().map(Into::into).collect(),
            },
        ),
        Err(BlogGetError::NotFound) => not_found(),
        Err(BlogGetError::Other(err)) => internal_server_error(err),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Blog post not found").into_response()
}
