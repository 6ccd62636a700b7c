use super::ApiClient;
use crate::error::ApiError;
use doorz_shared::protocol::BookingAction;
use doorz_shared::{BookingRecord, DashboardStats, MessageResponse, NewBookingRequest};

fn bookings_path(user_id: Option<i64>) -> String {
    match user_id {
        Some(user_id) => format!("/bookings?user_id={}", user_id),
        None => "/bookings".to_string(),
    }
}

fn booking_action_path(id: i64, action: BookingAction) -> String {
    format!("/bookings/{}/{}", id, action)
}

impl ApiClient {
    pub async fn get_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("/stats").await
    }

    /// 预订列表；`user_id` 过滤出某个用户自己的预订
    pub async fn get_bookings(&self, user_id: Option<i64>) -> Result<Vec<BookingRecord>, ApiError> {
        self.get_json(&bookings_path(user_id)).await
    }

    pub async fn create_booking(
        &self,
        booking: &NewBookingRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post_json("/bookings", booking).await
    }

    /// 状态迁移走专用动作端点，而不是通用字段更新
    pub async fn update_booking_status(
        &self,
        id: i64,
        action: BookingAction,
    ) -> Result<MessageResponse, ApiError> {
        self.post_empty(&booking_action_path(id, action)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookings_path_with_and_without_filter() {
        assert_eq!(bookings_path(None), "/bookings");
        assert_eq!(bookings_path(Some(7)), "/bookings?user_id=7");
    }

    #[test]
    fn test_booking_action_path() {
        assert_eq!(booking_action_path(3, BookingAction::Approve), "/bookings/3/approve");
        assert_eq!(booking_action_path(9, BookingAction::Reject), "/bookings/9/reject");
    }
}
