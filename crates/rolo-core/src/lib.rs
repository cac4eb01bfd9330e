pub mod domain;
pub mod error;
pub mod filter;
pub mod report;

pub use domain::*;
pub use error::CoreError;
pub use filter::{filter_contacts, sort_contacts, ContactFilter, ContactSortKey, SortOrder};
pub use report::{summarize, Summary};
