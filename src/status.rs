//! The single status line shown under the form.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }

    pub fn fetching() -> Self {
        Self::info("Fetching users from the API...")
    }

    pub fn loaded(count: usize) -> Self {
        Self::info(format!("Successfully loaded {count} user(s)."))
    }

    pub fn cleared() -> Self {
        Self::info("All generated users have been cleared.")
    }

    /// Shown for bad input in the count field.
    pub fn invalid_count() -> Self {
        Self::error("Please enter a number between 1 and 5.")
    }

    /// Shown for every network, HTTP, or format failure alike.
    pub fn fetch_failed() -> Self {
        Self::error("Failed to fetch user data. Please check your internet connection and try again.")
    }
}
