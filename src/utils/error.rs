use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrgError {
    #[error("Invalid email address for {name}: {value:?}")]
    InvalidEmail { name: String, value: String },

    #[error("Invalid phone number for {name}: {value:?}")]
    InvalidPhoneNumber { name: String, value: String },
}

pub type Result<T> = std::result::Result<T, OrgError>;
