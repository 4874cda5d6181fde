use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, From)]
pub enum Error {
    // -- Stubbed integrations (no backend behind this front end)
    AuthNotConfigured,
}

impl Error {
    /// User-facing line shown by the alert component.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::AuthNotConfigured => {
                "Sign-in is not wired up yet. No identity provider is configured."
            }
        }
    }
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate

// region:    --- Tests

#[cfg(test)]
mod tests {
    type TestError = Box<dyn std::error::Error>;
    type Result<T> = core::result::Result<T, TestError>; // For tests.

    use super::Error;

    #[test]
    fn test_user_message() -> Result<()> {
        let msg = Error::AuthNotConfigured.user_message();
        assert!(msg.contains("not wired up"));
        assert!(!msg.contains('—'), "plain punctuation only");
        Ok(())
    }
}

// endregion: --- Tests
