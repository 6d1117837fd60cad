/// Location of the durable cache store.
///
/// Provisioning the store itself (creating the directory, opening the
/// database) stays with the caller; this only names where it lives.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub data_dir: String,
    pub tree: String,
}

impl StoreConfig {
    const DEFAULT_DATA_DIR: &str = "./data";
    const DEFAULT_TREE: &str = "cache";

    pub fn new(data_dir: impl Into<String>, tree: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            tree: tree.into(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("BASALT_DATA_DIR")
                .unwrap_or_else(|_| Self::DEFAULT_DATA_DIR.to_string()),
            tree: std::env::var("BASALT_TREE").unwrap_or_else(|_| Self::DEFAULT_TREE.to_string()),
        }
    }
}
