/// GitHub Actions 把 `with:` 里的输入以这个前缀放进环境变量
pub static INPUT_ENV_PREFIX: &str = "INPUT_";

/// issue 卡片标题颜色
pub static ISSUE_CARD_TEMPLATE: &str = "blue";
/// 纯文本标签
pub static TAG_PLAIN_TEXT: &str = "plain_text";
/// markdown 元素标签
pub static TAG_MARKDOWN: &str = "markdown";

pub mod input {
    pub const URL: &str = "url";
    pub const MSG_TYPE: &str = "msg_type";
    pub const CONTENT: &str = "content";
    pub const ISSUE_TITLE: &str = "issue_title";
    pub const ISSUE_BODY: &str = "issue_body";
    pub const ISSUE_LINK_URL: &str = "issue_link_url";
}
