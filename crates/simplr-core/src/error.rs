use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown repository: {0}")]
    UnknownRepository(String),

    #[error("unknown lab '{lab}' in {semester}")]
    UnknownLab { semester: String, lab: String },
}
