use super::ApiClient;
use crate::error::ApiError;
use doorz_shared::{MessageResponse, Room, RoomPayload};

fn room_path(id: i64) -> String {
    format!("/rooms/{}", id)
}

impl ApiClient {
    pub async fn get_rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.get_json("/rooms").await
    }

    pub async fn create_room(&self, payload: &RoomPayload) -> Result<MessageResponse, ApiError> {
        self.post_json("/rooms", payload).await
    }

    // 标识符只出现在 URL 中，载荷类型本身不含 id
    pub async fn update_room(
        &self,
        id: i64,
        payload: &RoomPayload,
    ) -> Result<MessageResponse, ApiError> {
        self.put_json(&room_path(id), payload).await
    }

    pub async fn delete_room(&self, id: i64) -> Result<MessageResponse, ApiError> {
        self.delete_json(&room_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_path() {
        assert_eq!(room_path(5), "/rooms/5");
    }
}
