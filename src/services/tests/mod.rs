//! Service unit tests

mod template_renderer;
