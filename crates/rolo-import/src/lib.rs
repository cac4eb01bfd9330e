pub mod error;
pub mod pipeline;

pub use error::{ImportError, Result};
pub use pipeline::{
    format_import_phone, run_import, ContactSink, ImportProgress, ImportRow, ImportSummary,
    SinkError, REQUIRED_HEADERS, TEMPLATE,
};
