pub mod bootstrap;
pub mod export;
pub mod pipeline;
pub mod session;
pub mod templates;

pub use bootstrap::open_session;
pub use export::{DEFAULT_EXPORT_FILE, ExportedConfig};
pub use pipeline::GenerationPipeline;
pub use session::PostsmithSession;
pub use templates::TemplateKind;
