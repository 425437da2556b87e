//! Handlebars-backed template rendering
//!
//! The template string is registered once at construction, so syntax
//! errors surface before any network or store activity. Strict mode is on:
//! referencing a field the chosen candidate does not have fails the run
//! instead of rendering empty text.

use handlebars::Handlebars;

use crate::error::{PosterError, PosterResult};
use crate::traits::Renderer;
use crate::types::Candidate;

const TEMPLATE_NAME: &str = "post";

#[derive(Debug)]
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub fn new(template: &str) -> PosterResult<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry
            .register_template_string(TEMPLATE_NAME, template)
            .map_err(|err| PosterError::TemplateError {
                message: format!("invalid template: {err}"),
            })?;
        Ok(Self { registry })
    }
}

impl Renderer for HandlebarsRenderer {
    fn render(&self, candidate: &Candidate) -> PosterResult<String> {
        self.registry
            .render(TEMPLATE_NAME, candidate.fields())
            .map_err(|err| PosterError::TemplateError {
                message: err.to_string(),
            })
    }
}
