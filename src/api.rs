//! HTTP 客户端与各资源服务
//!
//! `client` 是唯一配置的请求封装；其余子模块按资源划分，
//! 每个函数只是 (路径, 动词, 载荷) 到一次 HTTP 调用的映射。

mod auth;
mod bookings;
mod client;
mod reports;
mod rooms;
mod users;

pub use client::ApiClient;

use leptos::prelude::*;

/// 从 Context 获取 API 客户端
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient should be provided")
}
