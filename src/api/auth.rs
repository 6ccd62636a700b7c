use super::ApiClient;
use crate::error::ApiError;
use doorz_shared::{LoginRequest, LoginResponse, PingResponse};

impl ApiClient {
    /// 凭据换取会话（token + 角色）
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("/login", credentials).await
    }

    /// 后端存活探测
    pub async fn ping(&self) -> Result<PingResponse, ApiError> {
        self.get_json("/ping").await
    }
}
