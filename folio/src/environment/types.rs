use folio_core_blog_impl::BlogFeatureServiceImpl;
use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_core_health_impl::HealthFeatureServiceImpl;
use folio_persistence_postgres::{
    blog::PostgresBlogRepository, contact::PostgresContactRepository, PostgresDatabase,
};
use folio_templates_impl::TemplateServiceImpl;

// Persistence
pub type Database = PostgresDatabase;

// Repositories
pub type ContactRepo = PostgresContactRepository;
pub type BlogRepo = PostgresBlogRepository;

// Templates
pub type Templates = TemplateServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Database>;
pub type BlogFeature = BlogFeatureServiceImpl<Database, BlogRepo>;
pub type ContactFeature = ContactFeatureServiceImpl<Database, ContactRepo>;

// API
pub type RestServer =
    folio_api_rest::RestServer<HealthFeature, BlogFeature, ContactFeature, Templates>;
