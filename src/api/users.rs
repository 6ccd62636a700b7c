use super::ApiClient;
use crate::error::ApiError;
use doorz_shared::{MessageResponse, User, UserPayload};

fn user_path(id: i64) -> String {
    format!("/users/{}", id)
}

impl ApiClient {
    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/users").await
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<MessageResponse, ApiError> {
        self.post_json("/users", payload).await
    }

    pub async fn update_user(
        &self,
        id: i64,
        payload: &UserPayload,
    ) -> Result<MessageResponse, ApiError> {
        self.put_json(&user_path(id), payload).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<MessageResponse, ApiError> {
        self.delete_json(&user_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_path() {
        assert_eq!(user_path(12), "/users/12");
    }
}
