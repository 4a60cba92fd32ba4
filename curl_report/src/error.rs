use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("reading {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing TOML test plan: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("parsing JSON test plan: {0}")]
    Json(#[from] serde_json::Error),
}
