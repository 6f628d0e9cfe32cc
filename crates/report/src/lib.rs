pub mod error;
pub mod render;
pub mod writer;

// Re-export the core types to provide a clean public API.
pub use error::ReportError;
pub use render::{render_report, BANNER_WIDTH};
pub use writer::ReportWriter;
