//! 请求封装
//!
//! 单一配置的 HTTP 客户端：统一的 base URL、默认头、固定超时。
//! 出站自动携带 Bearer token；入站统一拦截 401——整体清空会话并
//! 发出"未授权"事件，跳转由注入回调决定，传输层不直接操纵导航。

use std::sync::Arc;

use futures::future::{Either, select};
use futures::pin_mut;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::session::SessionContext;
use doorz_shared::ApiErrorBody;
use doorz_shared::protocol::{HttpMethod, bearer_header};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// 固定请求超时（毫秒），超时按普通错误上报，不做重试
const REQUEST_TIMEOUT_MS: u32 = 10_000;

fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionContext,
    on_unauthorized: Arc<dyn Fn() + Send + Sync>,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        session: SessionContext,
        on_unauthorized: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            session,
            on_unauthorized,
        }
    }

    /// 从编译期环境变量读取 base URL（未设置时退回本地默认）
    pub fn from_env(session: SessionContext, on_unauthorized: Arc<dyn Fn() + Send + Sync>) -> Self {
        let base_url = option_env!("DOORZ_API_URL").unwrap_or(DEFAULT_API_URL);
        Self::new(base_url, session, on_unauthorized)
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn builder(&self, method: HttpMethod, path: &str) -> RequestBuilder {
        let url = self.url(path);
        let builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        let builder = builder.header("Accept", "application/json");

        // 出站钩子：有 token 就带上 Bearer 头
        match self.session.snapshot().token {
            Some(token) => {
                let (name, value) = bearer_header(&token);
                builder.header(name, &value)
            }
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .builder(HttpMethod::Get, path)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.run(request).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .builder(HttpMethod::Post, path)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.run(request).await
    }

    /// 无请求体的 POST（预订状态等动作端点）
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .builder(HttpMethod::Post, path)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.run(request).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .builder(HttpMethod::Put, path)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.run(request).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .builder(HttpMethod::Delete, path)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.run(request).await
    }

    /// 发送请求并统一处理响应
    async fn run<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let response = match send_with_timeout(request).await {
            Ok(response) => response,
            Err(err) => {
                web_sys::console::error_1(&format!("[Api] {}", err).into());
                return Err(err);
            }
        };

        // 入站钩子：401 一律强制登出
        if response.status() == 401 {
            web_sys::console::warn_1(
                &"[Api] Session expired or invalid token. Logging out...".into(),
            );
            self.session.clear();
            (self.on_unauthorized)();
            return Err(ApiError::Unauthorized);
        }

        if !response.ok() {
            let code = response.status();
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("Request failed with status {}", code),
            };
            web_sys::console::error_1(&format!("[Api] {} (HTTP {})", message, code).into());
            return Err(ApiError::Status { code, message });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// 将请求与固定超时竞争
async fn send_with_timeout(request: Request) -> Result<Response, ApiError> {
    let send = request.send();
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    pin_mut!(send);
    pin_mut!(timeout);

    match select(send, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        assert_eq!(normalize_base_url("http://localhost:8080/api/"), "http://localhost:8080/api");
        assert_eq!(normalize_base_url(DEFAULT_API_URL), DEFAULT_API_URL);
    }

    #[test]
    fn test_join_url_handles_both_path_forms() {
        assert_eq!(join_url("http://x/api", "/rooms"), "http://x/api/rooms");
        assert_eq!(join_url("http://x/api", "rooms"), "http://x/api/rooms");
    }
}
