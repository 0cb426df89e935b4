use serde::{Deserialize, Serialize};

use super::{CardStructure, MessageKind};

/// 从 YAML 解析出来的任意结构
pub type Document = serde_json::Value;

/// 只在 `github_issue` 时使用
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct IssueFields {
    pub title: String,
    pub body: String,
    pub link_url: String,
}

/// 最终 POST 给 webhook 的请求体
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum WirePayload {
    /// text / post / image / share_chat，以及不认识的类型
    Normal {
        msg_type: MessageKind,
        content: Document,
    },
    /// interactive，`msg_type` 固定为 `interactive`
    Card { msg_type: MessageKind, card: Card },
}

impl WirePayload {
    pub fn msg_type(&self) -> &MessageKind {
        match self {
            WirePayload::Normal { msg_type, .. } | WirePayload::Card { msg_type, .. } => msg_type,
        }
    }
}

/// 卡片内容：用户给的原始文档，或者程序生成的卡片
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Card {
    Document(Document),
    Structured(CardStructure),
}
