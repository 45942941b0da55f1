use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to parse site data: {0}")]
    Parse(#[from] figment::Error),

    #[error("Entry {id} is missing required field '{field}'")]
    MissingField { id: u32, field: &'static str },

    #[error("Duplicate id {id} in section '{section}'")]
    DuplicateId { section: &'static str, id: u32 },
}
