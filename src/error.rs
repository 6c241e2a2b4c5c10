use thiserror::Error;

/// Errors produced at the driver seam.
///
/// These are visible to backend implementations and to callers using the
/// raw pass-through methods. The lookup and action surface of the crate
/// converts them into absence (`None`, empty) or failure (`false`) results
/// instead of propagating them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The underlying automation driver rejected or failed an operation.
    #[error("driver error: {0}")]
    Driver(String),

    /// No modal alert is currently active.
    #[error("no active alert")]
    NoAlert,

    /// The screen-automation facility rejected or failed an operation.
    #[error("screen automation error: {0}")]
    Screen(String),

    /// No window with the requested title exists.
    #[error("no such window: {0}")]
    NoWindow(String),
}

impl Error {
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver(message.into())
    }

    pub fn screen(message: impl Into<String>) -> Self {
        Self::Screen(message.into())
    }

    pub fn no_window(title: impl Into<String>) -> Self {
        Self::NoWindow(title.into())
    }
}

/// Result type used at the driver seam.
pub type Result<T> = std::result::Result<T, Error>;
