pub mod reqwest_client;

use async_trait::async_trait;
use http::Request;

/// 把请求发出去，返回响应体原文
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request<Vec<u8>>) -> crate::Result<String>;
}
