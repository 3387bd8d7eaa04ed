pub mod error;
pub mod report;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
