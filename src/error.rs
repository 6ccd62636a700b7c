//! API 错误类型
//!
//! 客户端只区分两类失败：授权失败（401，全局处理为强制登出）与
//! 其余错误（记录后原样抛给调用方，由视图层决定提示方式）。

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 网络请求失败（fetch 异常、连接被拒等）
    Network(String),
    /// 固定请求超时内未收到响应
    Timeout,
    /// 鉴权失败（HTTP 401）
    Unauthorized,
    /// 其他非 2xx 响应，携带 API 返回的错误消息
    Status { code: u16, message: String },
    /// 响应体解析失败
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Timeout => write!(f, "The server took too long to respond"),
            ApiError::Unauthorized => write!(f, "Session expired or invalid credentials"),
            ApiError::Status { code, message } => write!(f, "{} (HTTP {})", message, code),
            ApiError::Decode(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
