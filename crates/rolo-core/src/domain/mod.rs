pub mod contact;
pub mod country;
pub mod ids;
pub mod interaction;
pub mod owner;
pub mod phone;
pub mod task;

pub use contact::Contact;
pub use country::{find_country, Country, COUNTRIES};
pub use ids::{ContactId, InteractionId, OwnerId, TaskId};
pub use interaction::{Interaction, InteractionKind, InteractionStatus};
pub use owner::Owner;
pub use phone::{dial_code_mismatch, sanitize_local_digits, to_canonical, to_local};
pub use task::{Task, TaskPriority, TaskStatus};
