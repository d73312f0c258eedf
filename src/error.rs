// Crate-wide error type. Every variant states *where* things went wrong.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Creating the window failed.
    #[error("window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed.
    #[error("window update error: {0}")]
    WindowUpdate(String),

    /// Turning a surface buffer into a frame blob failed.
    #[error("frame encode error: {0}")]
    Encode(String),

    /// A frame blob was corrupt or had the wrong dimensions.
    #[error("frame decode error: {0}")]
    Decode(String),

    #[error("export error: {0}")]
    Export(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(Error::decode("x").to_string().starts_with("frame decode error:"));
        assert!(Error::config("x").to_string().starts_with("config error:"));
        assert!(
            Error::WindowInit("x".into())
                .to_string()
                .starts_with("window init error:")
        );
    }

    #[test]
    fn io_errors_convert_into_export() {
        let err: Error = std::io::Error::other("disk full").into();
        assert!(matches!(err, Error::Export(_)));
        assert!(err.to_string().contains("disk full"));
    }
}
