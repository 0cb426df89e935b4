use async_trait::async_trait;
use http::Request;

use crate::{Error, ErrorKind, http::client::Transport};

#[derive(Clone, Debug, Default)]
pub struct WebhookClient {
    client: reqwest::Client,
}

impl WebhookClient {
    /// 构建一个默认的客户端
    pub fn new() -> Self {
        Self::default()
    }

    /// 自己提供一个客户端
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for WebhookClient {
    async fn execute(&self, request: Request<Vec<u8>>) -> crate::Result<String> {
        let request =
            reqwest::Request::try_from(request).map_err(Error::context("convert request"))?;
        let resp = self
            .client
            .execute(request)
            .await
            .map_err(Error::context("send webhook"))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(Error::context("read webhook response"))?;
        tracing::debug!(%status, %body, "webhook response");
        if !status.is_success() {
            return Err(Error::new(
                ErrorKind::ResponseFail { status, body },
                "send webhook",
            ));
        }
        Ok(body)
    }
}
