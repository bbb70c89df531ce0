use thiserror::Error;

/// Errors from reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file exists but is not valid TOML
    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A section that should be a table holds some other value
    #[error("[{0}] is not a table")]
    NotATable(String),

    #[error("Unknown setting: {0}")]
    UnknownKey(String),
}

impl SettingsError {
    pub fn not_a_table(section: impl Into<String>) -> Self {
        Self::NotATable(section.into())
    }

    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey(key.into())
    }
}
