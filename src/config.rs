use std::collections::HashMap;

use crate::{
    Error,
    consts::{INPUT_ENV_PREFIX, input},
    model::{IssueFields, MessageKind},
};

/// 读取输入值的来源
pub trait InputSource {
    /// 原始值，未设置时返回 `None`
    fn raw(&self, name: &str) -> Option<String>;

    /// 去掉首尾空白，空值视为未设置
    fn input(&self, name: &str) -> Option<String> {
        self.raw(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn required(&self, name: &'static str) -> crate::Result<String> {
        self.input(name).ok_or_else(|| Error::missing_input(name))
    }

    fn optional(&self, name: &str) -> String {
        self.input(name).unwrap_or_default()
    }
}

/// 进程环境变量，名字按 `INPUT_<NAME>` 查找
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

/// `issue_title` -> `INPUT_ISSUE_TITLE`
pub fn env_var_name(name: &str) -> String {
    format!(
        "{}{}",
        INPUT_ENV_PREFIX,
        name.replace(' ', "_").to_uppercase()
    )
}

impl InputSource for ProcessEnv {
    fn raw(&self, name: &str) -> Option<String> {
        std::env::var(env_var_name(name)).ok()
    }
}

impl InputSource for HashMap<String, String> {
    fn raw(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl InputSource for HashMap<&str, &str> {
    fn raw(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| value.to_string())
    }
}

/// 一次调用的全部输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    /// webhook 地址
    pub url: String,
    pub kind: MessageKind,
    /// YAML 文本，`github_issue` 时不使用
    pub content: String,
    /// 只有 `github_issue` 才会读取
    pub issue: Option<IssueFields>,
}

impl Inputs {
    pub fn from_source<S: InputSource + ?Sized>(source: &S) -> crate::Result<Self> {
        let url = source.required(input::URL)?;
        let parsed =
            reqwest::Url::parse(&url).map_err(|e| Error::invalid_input(input::URL, e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_input(
                input::URL,
                format!("unsupported scheme: {}", parsed.scheme()),
            ));
        }
        let kind = MessageKind::from(source.required(input::MSG_TYPE)?.as_str());
        tracing::debug!(msg_type = %kind, "get msg_type");
        let content = source.optional(input::CONTENT);
        let issue = match kind {
            MessageKind::GithubIssue => Some(IssueFields {
                title: source.optional(input::ISSUE_TITLE),
                body: source.optional(input::ISSUE_BODY),
                link_url: source.optional(input::ISSUE_LINK_URL),
            }),
            _ => None,
        };
        Ok(Self {
            url,
            kind,
            content,
            issue,
        })
    }

    pub fn from_env() -> crate::Result<Self> {
        Self::from_source(&ProcessEnv)
    }
}
