use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing, Router,
};
use folio_templates_contracts::{
    AchievementsTemplate, ContactTemplate, IndexTemplate, ProjectsTemplate, ResumeTemplate,
    SiteContext, Template, TemplateService,
};

use super::internal_server_error;

pub fn router(templates: Arc<impl TemplateService>, site: SiteContext) -> Router<()> {
    Router::new()
        .route("/", routing::get(index))
        .route("/achievements", routing::get(achievements))
        .route("/resume", routing::get(resume))
        .route("/projects", routing::get(projects))
        .route("/contact", routing::get(contact))
        .with_state((templates, site))
}

type PagesState<T> = State<(Arc<T>, SiteContext)>;

async fn index<T: TemplateService>(State((templates, site)): PagesState<T>) -> Response {
    render_page(
        &*templates,
        &IndexTemplate {
            site,
            active_page: "home".into(),
        },
    )
}

async fn achievements<T: TemplateService>(State((templates, site)): PagesState<T>) -> Response {
    render_page(
        &*templates,
        &AchievementsTemplate {
            site,
            active_page: "achievements".into(),
        },
    )
}

async fn resume<T: TemplateService>(State((templates, site)): PagesState<T>) -> Response {
    render_page(
        &*templates,
        &ResumeTemplate {
            site,
            active_page: "resume".into(),
        },
    )
}

async fn projects<T: TemplateService>(State((templates, site)): PagesState<T>) -> Response {
    render_page(
        &*templates,
        &ProjectsTemplate {
            site,
            active_page: "projects".into(),
        },
    )
}

async fn contact<T: TemplateService>(State((templates, site)): PagesState<T>) -> Response {
    render_page(
        &*templates,
        &ContactTemplate {
            site,
            active_page: "contact".into(),
        },
    )
}

pub(super) fn render_page<T: Template + 'static>(
    templates: &impl TemplateService,
    template: &T,
) -> Response {
    match templates.render(template) {
        Ok(html) => Html(html).into_response(),
        Err(err) => internal_server_error(err),
    }
}
