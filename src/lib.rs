#![warn(clippy::unwrap_used)]

/// 工作流命令
pub mod actions;
/// 输入
pub mod config;
/// 静态量，常量
pub mod consts;
/// 发送流程
pub mod dispatcher;
/// 错误处理
mod error;
/// 请求描述和客户端
pub mod http;
/// 数据结构
pub mod model;

pub use dispatcher::Dispatcher;
pub use error::{Error, ErrorClass, ErrorKind, Result};
