//! Composition root: the service graph is small enough to wire by hand.

use folio_api_rest::RestServerConfig;
use folio_config::Config;
use folio_core_blog_impl::{BlogFeatureConfig, BlogFeatureServiceImpl};
use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_core_health_impl::HealthFeatureServiceImpl;
use folio_persistence_postgres::{blog::PostgresBlogRepository, contact::PostgresContactRepository};
use folio_templates_contracts::SiteContext;
use folio_templates_impl::TemplateServiceImpl;
use types::{BlogFeature, Database, RestServer};

pub mod types;

pub fn rest_server(config: &Config, database: Database) -> RestServer {
    let health = HealthFeatureServiceImpl::new(database.clone());
    let blog = blog_feature(config, database.clone());
    let contact = ContactFeatureServiceImpl::new(database, PostgresContactRepository);
    let templates = TemplateServiceImpl::new();

    RestServer::new(
        health,
        blog,
        contact,
        templates,
        RestServerConfig {
            site: site_context(config),
        },
    )
}

pub fn blog_feature(config: &Config, database: Database) -> BlogFeature {
    BlogFeatureServiceImpl::new(
        database,
        PostgresBlogRepository,
        BlogFeatureConfig {
            recommended_posts: config.blog.recommended_posts,
        },
    )
}

fn site_context(config: &Config) -> SiteContext {
    SiteContext {
        title: config.site.title.clone(),
        author: config.site.author.clone(),
        description: config.site.description.clone(),
    }
}
