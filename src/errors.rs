use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SitefixError {
    IoError(std::io::Error),
    FileError {
        path: PathBuf,
        source: std::io::Error,
    },
    Pattern(regex::Error),
    YamlError(serde_yaml::Error),
    SerdeError(serde_json::Error),
    ValidationError(String),
    ConfigNotFound(PathBuf),
}

impl fmt::Display for SitefixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SitefixError::IoError(e) => write!(f, "{}", e),
            SitefixError::FileError { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
            SitefixError::Pattern(e) => write!(f, "Invalid pattern: {}", e),
            SitefixError::YamlError(e) => write!(f, "YAML error: {}", e),
            SitefixError::SerdeError(e) => write!(f, "JSON error: {}", e),
            SitefixError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            SitefixError::ConfigNotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
        }
    }
}

impl std::error::Error for SitefixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SitefixError::IoError(e) => Some(e),
            SitefixError::FileError { source, .. } => Some(source),
            SitefixError::Pattern(e) => Some(e),
            SitefixError::YamlError(e) => Some(e),
            SitefixError::SerdeError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SitefixError {
    fn from(err: std::io::Error) -> Self {
        SitefixError::IoError(err)
    }
}

impl From<regex::Error> for SitefixError {
    fn from(err: regex::Error) -> Self {
        SitefixError::Pattern(err)
    }
}

impl From<serde_yaml::Error> for SitefixError {
    fn from(err: serde_yaml::Error) -> Self {
        SitefixError::YamlError(err)
    }
}

impl From<serde_json::Error> for SitefixError {
    fn from(err: serde_json::Error) -> Self {
        SitefixError::SerdeError(err)
    }
}

impl From<validator::ValidationErrors> for SitefixError {
    fn from(err: validator::ValidationErrors) -> Self {
        SitefixError::ValidationError(err.to_string())
    }
}

impl SitefixError {
    /// Attach the path that was being read or written to an I/O failure.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SitefixError::FileError {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SitefixError>;
