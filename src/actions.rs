//! 与 Actions runner 交互的工作流命令，写到 stdout

use std::fmt::Display;

/// 转义命令里的消息部分
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub fn command(name: &str, message: impl Display) -> String {
    format!("::{}::{}", name, escape_data(&message.to_string()))
}

/// 让 runner 回显之后的工作流命令
pub fn set_command_echo(enabled: bool) {
    println!("{}", command("echo", if enabled { "on" } else { "off" }));
}

/// 把这一步标记为失败，进程退出码由调用方决定
pub fn set_failed(message: impl Display) {
    println!("{}", command("error", message));
}
