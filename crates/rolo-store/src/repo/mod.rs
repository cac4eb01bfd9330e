pub mod contacts;
pub mod interactions;
pub mod owners;
pub mod tasks;

pub use contacts::{ContactNew, ContactUpdate, ContactsRepo};
pub use interactions::{InteractionNew, InteractionUpdate, InteractionsRepo};
pub use owners::OwnersRepo;
pub use tasks::{TaskNew, TaskUpdate, TasksRepo};
