use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, TaquinError>;

#[derive(thiserror::Error, Debug)]
pub enum TaquinError {
    #[error("board size {0} is outside the supported range 3..=5")]
    InvalidSize(usize),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed score file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed settings file: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("could not encode settings: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
    #[error("unsupported score file version {0}")]
    UnsupportedVersion(u32),
    #[error("terminal error: {0}")]
    Terminal(#[source] io::Error),
}

impl TaquinError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TaquinError::Io {
            path: path.into(),
            source,
        }
    }
}
