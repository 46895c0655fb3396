// Context Builder: table introspection, metric glossary, and the rendered
// context block handed to the prompt assembler.

pub mod builder;
pub mod handlers;
pub mod models;
pub mod render;
pub mod table_ref;

pub use builder::ContextBuilder;
pub use models::ContextBlock;
