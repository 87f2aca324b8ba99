// MIT/Apache2 License

use std::fmt;

/// Sum error type for clipdemo operations.
#[derive(Debug)]
pub enum Error {
    /// A static string message.
    StaticMsg(&'static str),
    /// A string message. Host canvas implementations wrap their own failures in this variant.
    Msg(String),
    /// A restore was issued on a canvas whose state stack was empty.
    RestoreUnderflow,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticMsg(s) => f.write_str(s),
            Self::Msg(s) => f.write_str(s),
            Self::RestoreUnderflow => {
                f.write_str("Attempted to restore canvas state that was never saved")
            }
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Error::StaticMsg("no surface").to_string(), "no surface");
        assert_eq!(
            Error::Msg(String::from("device lost")).to_string(),
            "device lost"
        );
        assert_eq!(
            Error::RestoreUnderflow.to_string(),
            "Attempted to restore canvas state that was never saved"
        );
    }
}
