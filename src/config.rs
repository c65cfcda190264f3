use std::env;

/// Which cloud database implementation backs the stock endpoints.
/// Resolved once at startup; nothing rewires providers after that.
#[derive(Debug, Clone)]
pub enum DataSource {
    Postgres { database_url: String },
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_source: DataSource,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let data_source = match env::var("DATA_SOURCE").as_deref() {
            Ok("memory") => DataSource::Memory,
            Ok("postgres") | Err(_) => {
                let database_url = env::var("DATABASE_URL").map_err(|_| {
                    anyhow::anyhow!("DATABASE_URL is required when DATA_SOURCE=postgres")
                })?;
                DataSource::Postgres { database_url }
            }
            Ok(other) => {
                anyhow::bail!("unknown DATA_SOURCE {other:?}, expected postgres or memory")
            }
        };

        Ok(Self {
            host,
            port,
            data_source,
        })
    }
}
