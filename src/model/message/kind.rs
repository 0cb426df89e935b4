use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Serialize, Serializer};

/// 消息类型，对应请求体里的 `msg_type`
///
/// 参考 <https://open.feishu.cn/document/ukTMukTMukTM/ucTM5YjL3ETO24yNxkjN#8b0f2a1b>
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// 文本
    Text,
    /// 富文本
    Post,
    /// 图片
    Image,
    /// 分享群名片
    ShareChat,
    /// 消息卡片
    Interactive,
    /// 本地别名，发出去的是 `interactive`
    GithubIssue,
    /// 不认识的类型，原样保留，按普通消息处理
    Other(String),
}

impl MessageKind {
    pub fn as_str(&self) -> &str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Post => "post",
            MessageKind::Image => "image",
            MessageKind::ShareChat => "share_chat",
            MessageKind::Interactive => "interactive",
            MessageKind::GithubIssue => "github_issue",
            MessageKind::Other(tag) => tag.as_str(),
        }
    }
}

impl FromStr for MessageKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "text" => MessageKind::Text,
            "post" => MessageKind::Post,
            "image" => MessageKind::Image,
            "share_chat" => MessageKind::ShareChat,
            "interactive" => MessageKind::Interactive,
            "github_issue" => MessageKind::GithubIssue,
            other => MessageKind::Other(other.to_string()),
        })
    }
}

impl From<&str> for MessageKind {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MessageKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
