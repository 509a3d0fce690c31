use crate::error::{BadEnvVarSnafu, MahasiswaResult};
use dotenvy::var;
use snafu::ResultExt;
use std::sync::Arc;

pub const API_MAHASISWA_URL: &str = "https://crud-express-main.vercel.app/api/mahasiswa";
pub const API_PRODI_URL: &str = "https://crud-express-main.vercel.app/api/prodi";
const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    api_config: Arc<ApiConfig>,
    server_ip: Arc<str>,
}

impl RuntimeConfiguration {
    pub fn new() -> MahasiswaResult<Self> {
        let server_ip = match var("MAHASISWA_SERVER_IP") {
            Ok(ip) => ip,
            Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => {
                DEFAULT_SERVER_IP.to_string()
            }
            Err(e) => {
                return Err(e).context(BadEnvVarSnafu {
                    name: "MAHASISWA_SERVER_IP",
                });
            }
        };

        Ok(Self {
            api_config: Arc::new(ApiConfig::default()),
            server_ip: server_ip.into(),
        })
    }

    #[cfg(test)]
    pub fn with_api(api_config: ApiConfig) -> Self {
        Self {
            api_config: Arc::new(api_config),
            server_ip: DEFAULT_SERVER_IP.into(),
        }
    }

    pub fn api_config(&self) -> Arc<ApiConfig> {
        self.api_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    mahasiswa_url: String,
    prodi_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mahasiswa_url: API_MAHASISWA_URL.to_string(),
            prodi_url: API_PRODI_URL.to_string(),
        }
    }
}

impl ApiConfig {
    #[cfg(test)]
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            mahasiswa_url: format!("{base}/api/mahasiswa"),
            prodi_url: format!("{base}/api/prodi"),
        }
    }

    pub fn mahasiswa_url(&self) -> &str {
        &self.mahasiswa_url
    }

    pub fn prodi_url(&self) -> &str {
        &self.prodi_url
    }

    pub fn mahasiswa_item_url(&self, id: &str) -> String {
        format!("{}/{id}", self.mahasiswa_url)
    }
}
