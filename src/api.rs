use crate::{
    config::ApiConfig,
    data::{form::StudentDraft, prodi::Prodi, student::Student},
    error::{
        BadStatusSnafu, BuildClientSnafu, DecodeBodySnafu, MahasiswaResult, ParseJsonSnafu,
        SendRequestSnafu,
    },
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use snafu::ResultExt;
use std::sync::Arc;

///the remote student + prodi api, swapped for a fake in tests
#[async_trait]
pub trait MahasiswaApi: Send + Sync {
    async fn list_mahasiswa(&self) -> MahasiswaResult<Vec<Student>>;
    async fn create_mahasiswa(&self, draft: &StudentDraft) -> MahasiswaResult<Value>;
    async fn delete_mahasiswa(&self, id: &str) -> MahasiswaResult<()>;
    async fn list_prodi(&self) -> MahasiswaResult<Vec<Prodi>>;
}

#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    config: Arc<ApiConfig>,
}

impl HttpApi {
    pub fn new(config: Arc<ApiConfig>) -> MahasiswaResult<Self> {
        let client = Client::builder().build().context(BuildClientSnafu)?;
        Ok(Self { client, config })
    }

    fn check(response: reqwest::Result<Response>, url: &str) -> MahasiswaResult<Response> {
        response
            .context(SendRequestSnafu { url })?
            .error_for_status()
            .context(BadStatusSnafu { url })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> MahasiswaResult<T> {
        Self::check(self.client.get(url).send().await, url)?
            .json()
            .await
            .context(DecodeBodySnafu { url })
    }
}

#[async_trait]
impl MahasiswaApi for HttpApi {
    async fn list_mahasiswa(&self) -> MahasiswaResult<Vec<Student>> {
        self.get_json(self.config.mahasiswa_url()).await
    }

    async fn create_mahasiswa(&self, draft: &StudentDraft) -> MahasiswaResult<Value> {
        let url = self.config.mahasiswa_url();
        let bytes = Self::check(self.client.post(url).json(draft).send().await, url)?
            .bytes()
            .await
            .context(DecodeBodySnafu { url })?;

        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).context(ParseJsonSnafu { url })
    }

    async fn delete_mahasiswa(&self, id: &str) -> MahasiswaResult<()> {
        let url = self.config.mahasiswa_item_url(id);
        Self::check(self.client.delete(&url).send().await, &url)?;
        Ok(())
    }

    async fn list_prodi(&self) -> MahasiswaResult<Vec<Prodi>> {
        self.get_json(self.config.prodi_url()).await
    }
}
