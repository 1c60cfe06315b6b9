use std::path::PathBuf;

/// Errors at the fallible edges of the crate: lexicon overrides and config.
/// Classification and rendering never fail.
#[derive(Debug, thiserror::Error)]
pub enum WarmError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("lexicon override for `{category}` contains no phrases")]
    EmptyCategory { category: &'static str },
    #[error("environment variable `{name}` is not valid Unicode")]
    NonUnicodeEnv { name: String },
    #[error("invalid config value for `{key}`: {value}")]
    InvalidConfig { key: &'static str, value: String },
}
