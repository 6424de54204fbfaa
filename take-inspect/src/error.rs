pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The sink could not be written to
    #[error("failed to write inspected value: {0}")]
    Io(#[from] std::io::Error),
    /// The `Debug` implementation of the inspected value failed
    #[error("failed to format inspected value")]
    Format(#[from] std::fmt::Error),
}
