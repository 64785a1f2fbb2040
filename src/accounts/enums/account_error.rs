use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("username already exists")]
    AlreadyExists,

    #[error("username is reserved")]
    ReservedName,

    #[error("the administrator account cannot be removed")]
    AdminProtected,

    #[error("persistence failed: {0}")]
    Persist(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
