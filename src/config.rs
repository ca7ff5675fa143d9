use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let data_dir = std::env::var("RETURNDESK_DATA_DIR")
            .unwrap_or_else(|_| "./data".into())
            .into();

        Ok(Self { data_dir })
    }
}
