use std::{net::IpAddr, sync::Arc};

use axum::Router;
use folio_core_blog_contracts::BlogFeatureService;
use folio_core_contact_contracts::ContactFeatureService;
use folio_core_health_contracts::HealthFeatureService;
use folio_templates_contracts::{SiteContext, TemplateService};
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Blog, Contact, Templates> {
    health: Health,
    blog: Blog,
    contact: Contact,
    templates: Templates,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub site: SiteContext,
}

impl<Health, Blog, Contact, Templates> RestServer<Health, Blog, Contact, Templates>
where
    Health: HealthFeatureService,
    Blog: BlogFeatureService,
    Contact: ContactFeatureService,
    Templates: TemplateService,
{
    pub fn new(
        health: Health,
        blog: Blog,
        contact: Contact,
        templates: Templates,
        config: RestServerConfig,
    ) -> Self {
        Self {
            health,
            blog,
            contact,
            templates,
            config,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let templates = Arc::new(self.templates);
        let site = self.config.site;

        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::pages::router(templates.clone(), site.clone()))
            .merge(routes::blog::router(self.blog.into(), templates, site))
            .merge(routes::contact::router(self.contact.into()));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
