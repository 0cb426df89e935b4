/// 请求描述
pub mod api;
/// 发送请求的客户端
pub mod client;
