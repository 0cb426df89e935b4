use super::*;
use crate::{Error, ErrorKind};

/// 把 YAML 文本解析成通用文档，空文本或解析结果为 null 视为错误
///
/// 只有 `true`/`false` 算布尔值，`yes`/`on` 之类保持字符串
pub fn parse_document(content: &str) -> crate::Result<Document> {
    if content.trim().is_empty() {
        return Err(Error::new(ErrorKind::EmptyDocument, "parse content"));
    }
    let mut options = serde_saphyr::Options::default();
    options.strict_booleans = true;
    let document = serde_saphyr::from_str_with_options::<Document>(content, options)
        .map_err(Error::context("parse content"))?;
    if document.is_null() {
        return Err(Error::new(ErrorKind::EmptyDocument, "parse content"));
    }
    Ok(document)
}

/// 根据消息类型组装请求体，不做任何 IO
pub fn compose(
    kind: &MessageKind,
    content: &str,
    issue: Option<&IssueFields>,
) -> crate::Result<WirePayload> {
    match kind {
        MessageKind::Text | MessageKind::Post | MessageKind::Image | MessageKind::ShareChat => {
            compose_normal(kind, content)
        }
        MessageKind::Interactive => Ok(WirePayload::Card {
            msg_type: MessageKind::Interactive,
            card: Card::Document(parse_document(content)?),
        }),
        MessageKind::GithubIssue => {
            let issue = issue.ok_or_else(|| {
                Error::new(ErrorKind::MissingInput("issue fields"), "compose github_issue")
            })?;
            tracing::debug!(body = %issue.body, "issue card");
            Ok(WirePayload::Card {
                msg_type: MessageKind::Interactive,
                card: Card::Structured(CardStructure::from_issue(issue)),
            })
        }
        // fallback
        MessageKind::Other(_) => compose_normal(kind, content),
    }
}

fn compose_normal(kind: &MessageKind, content: &str) -> crate::Result<WirePayload> {
    Ok(WirePayload::Normal {
        msg_type: kind.clone(),
        content: parse_document(content)?,
    })
}
