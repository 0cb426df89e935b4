use http::{Method, Request, header::CONTENT_TYPE};
use serde::Serialize;

use crate::model::WirePayload;

pub trait Api {
    type Request: Serialize;
    const METHOD: Method;
}

/// 自定义机器人 webhook，地址里已经带了凭证
pub struct SendWebhook;

impl Api for SendWebhook {
    type Request = WirePayload;

    const METHOD: Method = Method::POST;
}

pub fn json_request<A: Api>(request: &A::Request, url: &str) -> crate::Result<Request<Vec<u8>>> {
    let body = serde_json::to_vec::<A::Request>(request)
        .map_err(crate::Error::context("serialize json request"))?;
    tracing::debug!(body = %String::from_utf8_lossy(&body), "post body");
    Request::builder()
        .uri(url)
        .header(CONTENT_TYPE, "application/json")
        .method(A::METHOD)
        .body(body)
        .map_err(crate::Error::context("build json request"))
}
