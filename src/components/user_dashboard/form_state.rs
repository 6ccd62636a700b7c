//! 预订表单状态模块
//!
//! `datetime-local` 的取值在这里被规整为 API 接受的格式，
//! 并在提交前做区间校验。

use doorz_shared::{NewBookingRequest, normalize_datetime_local, parse_flexible_datetime};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct BookingFormState {
    /// select 的原始取值；空串表示尚未选择房间
    pub room_id: RwSignal<String>,
    pub start_time: RwSignal<String>,
    pub end_time: RwSignal<String>,
    pub purpose: RwSignal<String>,
}

impl BookingFormState {
    pub fn new() -> Self {
        Self {
            room_id: RwSignal::new(String::new()),
            start_time: RwSignal::new(String::new()),
            end_time: RwSignal::new(String::new()),
            purpose: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.room_id.set(String::new());
        self.start_time.set(String::new());
        self.end_time.set(String::new());
        self.purpose.set(String::new());
    }

    /// 将表单状态转换为预订请求
    pub fn to_request(&self, user_id: i64) -> Result<NewBookingRequest, String> {
        let room_id: i64 = self
            .room_id
            .get_untracked()
            .parse()
            .map_err(|_| "Choose a room first".to_string())?;

        let start_time = normalize_datetime_local(&self.start_time.get_untracked());
        let end_time = normalize_datetime_local(&self.end_time.get_untracked());

        match (
            parse_flexible_datetime(&start_time),
            parse_flexible_datetime(&end_time),
        ) {
            (Some(start), Some(end)) if end > start => {}
            (Some(_), Some(_)) => return Err("End time must be after the start time".to_string()),
            _ => return Err("Start and end time are required".to_string()),
        }

        let purpose = self.purpose.get_untracked().trim().to_string();
        if purpose.is_empty() {
            return Err("Purpose is required".to_string());
        }

        Ok(NewBookingRequest {
            room_id,
            user_id,
            start_time,
            end_time,
            purpose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookingFormState {
        let form = BookingFormState::new();
        form.room_id.set("2".to_string());
        form.start_time.set("2026-03-01T09:00".to_string());
        form.end_time.set("2026-03-01T11:00".to_string());
        form.purpose.set("Lab session".to_string());
        form
    }

    #[test]
    fn test_datetime_local_values_are_normalized() {
        let request = filled().to_request(7).unwrap();
        assert_eq!(request.room_id, 2);
        assert_eq!(request.user_id, 7);
        assert_eq!(request.start_time, "2026-03-01 09:00:00");
        assert_eq!(request.end_time, "2026-03-01 11:00:00");
    }

    #[test]
    fn test_missing_room_is_rejected() {
        let form = filled();
        form.room_id.set(String::new());
        assert!(form.to_request(7).is_err());
    }

    #[test]
    fn test_inverted_interval_is_rejected() {
        let form = filled();
        form.end_time.set("2026-03-01T08:00".to_string());
        assert!(form.to_request(7).is_err());
    }

    #[test]
    fn test_blank_purpose_is_rejected() {
        let form = filled();
        form.purpose.set("   ".to_string());
        assert!(form.to_request(7).is_err());
    }
}
