use std::sync::Arc;

use folio_templates_contracts::{Template, TemplateService, BASE_TEMPLATE, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    state: State,
}

impl TemplateServiceImpl {
    pub fn new() -> Self {
        Self {
            state: Default::default(),
        }
    }
}

impl Default for TemplateServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();

        tera.add_raw_template("base", BASE_TEMPLATE).unwrap();

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template).unwrap();
        }

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.state.0.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use folio_demo::blog::{ALL_SUMMARIES, RUST_POST};
    use folio_templates_contracts::{
        AchievementsTemplate, BlogDetailTemplate, BlogListTemplate, ContactTemplate,
        IndexTemplate, ProjectsTemplate, ResumeTemplate, SiteContext,
    };

    use super::*;

    fn site() -> SiteContext {
        SiteContext {
            title: "Portfolio".into(),
            author: "Umer".into(),
            description: "Personal portfolio and blog".into(),
        }
    }

    #[test]
    fn index() {
        test_template(IndexTemplate {
            site: site(),
            active_page: "home".into(),
        });
    }

    #[test]
    fn achievements() {
        test_template(AchievementsTemplate {
            site: site(),
            active_page: "achievements".into(),
        });
    }

    #[test]
    fn resume() {
        test_template(ResumeTemplate {
            site: site(),
            active_page: "resume".into(),
        });
    }

    #[test]
    fn projects() {
        test_template(ProjectsTemplate {
            site: site(),
            active_page: "projects".into(),
        });
    }

    #[test]
    fn contact() {
        let html = test_template(ContactTemplate {
            site: site(),
            active_page: "contact".into(),
        });

        // The submission scripts bind to these ids; the rendered page must
        // provide them.
        for id in ["contactForm", "successMessage", "fname", "email", "message", "phone"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "{id}");
        }
    }

    #[test]
    fn blog_list() {
        let html = test_template(BlogListTemplate {
            site: site(),
            active_page: "blog".into(),
            posts: ALL_SUMMARIES.clone().into_iter().map(Into::into).collect(),
        });

        assert!(html.contains("getting-started-with-rust"));
        assert!(html.contains("id=\"search-input\""));
    }

    #[test]
    fn blog_detail() {
        let html = test_template(BlogDetailTemplate {
            site: site(),
            active_page: "blog".into(),
            post: RUST_POST.clone().into(),
            recommended: ALL_SUMMARIES
                .clone()
                .into_iter()
                .filter(|x| x.slug != RUST_POST.slug)
                .map(Into::into)
                .collect(),
        });

        assert!(html.contains("<h2>Installing</h2>"));
        assert!(html.contains("id=\"tocList\""));
    }

    fn test_template<T: Template + 'static>(template: T) -> String {
        // Arrange
        let sut = TemplateServiceImpl::new();

        // Act
        let result = sut.render(&template);

        // Assert
        result.unwrap()
    }
}
