use crate::{
    config::{InputSource, Inputs},
    http::{
        api::{SendWebhook, json_request},
        client::{Transport, reqwest_client::WebhookClient},
    },
    model::{WirePayload, compose},
};

/// 读输入，组装消息，发一次请求
#[derive(Debug, Clone)]
pub struct Dispatcher<T = WebhookClient> {
    inputs: Inputs,
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(inputs: Inputs, transport: T) -> Self {
        Self { inputs, transport }
    }

    /// 缺少必需输入时直接失败，不会碰网络
    pub fn from_source<S: InputSource + ?Sized>(source: &S, transport: T) -> crate::Result<Self> {
        Ok(Self::new(Inputs::from_source(source)?, transport))
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    pub fn payload(&self) -> crate::Result<WirePayload> {
        compose(
            &self.inputs.kind,
            &self.inputs.content,
            self.inputs.issue.as_ref(),
        )
    }

    /// 返回接收端的响应体原文，不做解析
    pub async fn dispatch(&self) -> crate::Result<String> {
        let payload = self.payload()?;
        let request = json_request::<SendWebhook>(&payload, &self.inputs.url)?;
        tracing::info!(msg_type = %payload.msg_type(), "sending webhook message");
        self.transport.execute(request).await
    }
}

impl Dispatcher<WebhookClient> {
    pub fn from_env() -> crate::Result<Self> {
        Ok(Self::new(Inputs::from_env()?, WebhookClient::new()))
    }
}
