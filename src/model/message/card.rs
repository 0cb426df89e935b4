use serde::{Deserialize, Serialize};

use super::IssueFields;
use crate::consts::{ISSUE_CARD_TEMPLATE, TAG_MARKDOWN, TAG_PLAIN_TEXT};

/// 程序生成的消息卡片
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CardStructure {
    pub header: CardHeader,
    pub elements: Vec<CardElement>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CardHeader {
    pub title: CardText,
    /// 标题栏颜色
    pub template: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CardText {
    pub content: String,
    pub tag: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CardElement {
    pub tag: String,
    pub content: String,
}

impl CardStructure {
    /// issue 标题做卡片标题，issue 正文做唯一的 markdown 元素
    ///
    /// `link_url` 暂不使用
    pub fn from_issue(issue: &IssueFields) -> Self {
        CardStructure {
            header: CardHeader {
                title: CardText {
                    content: issue.title.clone(),
                    tag: TAG_PLAIN_TEXT.to_string(),
                },
                template: ISSUE_CARD_TEMPLATE.to_string(),
            },
            elements: vec![CardElement {
                tag: TAG_MARKDOWN.to_string(),
                content: issue.body.clone(),
            }],
        }
    }
}
