use tera::{Context, Tera};

use crate::data::models::{ResultsView, NO_RESULTS_NOTICE};

const RESULTS_TEMPLATE: &str = "results.html";

pub fn render_template(
    tera: &Tera,
    template_name: &str,
    context: &Context,
) -> Result<String, tera::Error> {
    tera.render(template_name, context).map_err(|e| {
        log::error!("Error rendering template {}: {}", template_name, e);
        e
    })
}

/// Renders the results container to HTML. Item text is escaped.
pub struct Renderer {
    templates: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut templates = Tera::default();
        templates.add_raw_template(RESULTS_TEMPLATE, include_str!("../templates/results.html"))?;
        Ok(Self { templates })
    }

    pub fn render_results(&self, view: &ResultsView) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("view", view);
        context.insert("notice", NO_RESULTS_NOTICE);
        render_template(&self.templates, RESULTS_TEMPLATE, &context)
    }
}
