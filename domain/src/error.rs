use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("no expense with id {id} in year {year}")]
    ExpenseNotFound { year: i32, id: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid sample data: {0}")]
    InvalidSampleData(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
