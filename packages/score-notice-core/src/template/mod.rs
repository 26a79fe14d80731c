//! Message templates and placeholder rendering.

mod defaults;
mod renderer;
mod store;

pub use defaults::default_template;
pub use renderer::{Placeholder, Placeholders, Renderer};
pub use store::TemplateStore;
