use std::borrow::Cow;

use http::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    context: Cow<'static, str>,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.context, self.kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Yaml(err) => Some(err),
            ErrorKind::SerdeJson(err) => Some(err),
            ErrorKind::Http(err) => Some(err),
            ErrorKind::Reqwest(err) => Some(err),
            _ => None,
        }
    }
}

impl Error {
    pub fn new(kind: ErrorKind, context: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }
    pub const fn context<K: Into<ErrorKind>>(
        context: impl Into<Cow<'static, str>>,
    ) -> impl FnOnce(K) -> Error {
        move |kind| Error::new(kind.into(), context)
    }
    pub fn missing_input(name: &'static str) -> Self {
        Self::new(ErrorKind::MissingInput(name), "read inputs")
    }
    pub fn invalid_input(name: &'static str, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidInput {
                name,
                reason: reason.into(),
            },
            "read inputs",
        )
    }
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
    /// 错误所属的大类
    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }
}

/// 调用方可见的三类失败
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// content 不是合法的结构化文档
    Parse,
    /// 缺少或错误的输入
    Configuration,
    /// 发送失败，或者接收端返回了非 2xx
    Delivery,
}

impl From<serde_saphyr::Error> for ErrorKind {
    fn from(err: serde_saphyr::Error) -> Self {
        Self::Yaml(err)
    }
}

impl From<serde_json::Error> for ErrorKind {
    fn from(err: serde_json::Error) -> Self {
        Self::SerdeJson(err)
    }
}

impl From<http::Error> for ErrorKind {
    fn from(err: http::Error) -> Self {
        Self::Http(err)
    }
}

impl From<reqwest::Error> for ErrorKind {
    fn from(err: reqwest::Error) -> Self {
        Self::Reqwest(err)
    }
}

#[derive(Debug)]
pub enum ErrorKind {
    Yaml(serde_saphyr::Error),
    EmptyDocument,
    MissingInput(&'static str),
    InvalidInput { name: &'static str, reason: String },
    SerdeJson(serde_json::Error),
    Http(http::Error),
    Reqwest(reqwest::Error),
    ResponseFail { status: StatusCode, body: String },
}

impl ErrorKind {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Yaml(_) | Self::EmptyDocument => ErrorClass::Parse,
            Self::MissingInput(_)
            | Self::InvalidInput { .. }
            | Self::SerdeJson(_)
            | Self::Http(_) => ErrorClass::Configuration,
            Self::Reqwest(_) | Self::ResponseFail { .. } => ErrorClass::Delivery,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yaml(err) => write!(f, "yaml error: {}", err),
            Self::EmptyDocument => write!(f, "empty document"),
            Self::MissingInput(name) => write!(f, "input required and not supplied: {}", name),
            Self::InvalidInput { name, reason } => write!(f, "invalid input {}: {}", name, reason),
            Self::SerdeJson(err) => write!(f, "serde_json error: {}", err),
            Self::Http(err) => write!(f, "http error: {}", err),
            Self::Reqwest(err) => write!(f, "reqwest error: {}", err),
            Self::ResponseFail { status, body } => {
                write!(f, "response fail: [{}] {}", status.as_u16(), body)
            }
        }
    }
}
