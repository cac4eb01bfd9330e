use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("name is required")]
    EmptyName,
    #[error("email is required")]
    EmptyEmail,
    #[error("phone is required")]
    EmptyPhone,
    #[error("task title is required")]
    EmptyTitle,
    #[error("interaction summary is required")]
    EmptySummary,
}
