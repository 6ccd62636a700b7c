use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const ROLE_TAG_ADMIN: &str = "admin";
pub const ROLE_TAG_USER: &str = "user";

// =========================================================
// 角色与状态标签 (Role / Status Tags)
// =========================================================

/// Coarse access role used for route gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// 解析存储中的角色标签。
    ///
    /// 未知的标签一律按普通用户处理（与路由守卫的回退分支一致）。
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            ROLE_TAG_ADMIN => Role::Admin,
            _ => Role::User,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Role::Admin => ROLE_TAG_ADMIN,
            Role::User => ROLE_TAG_USER,
        }
    }
}

/// Booking lifecycle tag as reported by the API.
///
/// The wire value stays a plain string on [`Booking`]; this enum only
/// classifies it for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Unknown,
}

impl BookingStatus {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "pending" => BookingStatus::Pending,
            "approved" => BookingStatus::Approved,
            "rejected" => BookingStatus::Rejected,
            _ => BookingStatus::Unknown,
        }
    }
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub capacity: i32,
    pub is_active: bool,
}

/// Body shape for room create/update calls.
///
/// The identifier travels in the URL, never in the body, so this type
/// simply has no `id` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub capacity: i32,
    pub is_active: bool,
}

impl From<&Room> for RoomPayload {
    fn from(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            room_type: room.room_type.clone(),
            capacity: room.capacity,
            is_active: room.is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub room_id: i64,
    pub user_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub purpose: String,
    pub status: String,
}

impl Booking {
    /// 计算预订时长（小时）。
    ///
    /// 时间戳无法解析或区间为空时返回 `None`，与报表生成端跳过
    /// 坏数据的行为一致。
    pub fn duration_hours(&self) -> Option<f64> {
        let start = parse_flexible_datetime(&self.start_time)?;
        let end = parse_flexible_datetime(&self.end_time)?;
        let minutes = (end - start).num_minutes();
        if minutes <= 0 {
            return None;
        }
        Some(minutes as f64 / 60.0)
    }
}

/// Booking row as listed by the API: the raw booking plus the joined
/// room/user display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    #[serde(flatten)]
    pub booking: Booking,
    pub room_name: String,
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBookingRequest {
    pub room_id: i64,
    pub user_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub role: Role,
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Body shape for user create/update calls. An empty password on update
/// means "keep the current one" (the API skips re-hashing it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_rooms: i64,
    pub active_usage: i64,
    pub total_bookings: i64,
    pub pending_requests: i64,
}

/// Response of the on-demand report generator: names and download URLs of
/// the CSV/JSON files it produced server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFiles {
    pub message: String,
    pub csv_file_name: String,
    pub json_file_name: String,
    pub download_url_csv: String,
    pub download_url_json: String,
}

// =========================================================
// 认证载荷 (Auth Payloads)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The role tag is kept as the raw string here: it is persisted verbatim
/// and only classified via [`Role::from_tag`] at guard time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingResponse {
    pub status: String,
    pub message: String,
}

/// Error body returned by the API. Most endpoints use `{"error": …}`,
/// the auth endpoint uses `{"message": …}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(alias = "message")]
    pub error: String,
}

// =========================================================
// 时间处理 (Datetime Helpers)
// =========================================================

/// Parse a booking timestamp in either of the two formats the API accepts:
/// RFC 3339 or `YYYY-MM-DD HH:MM:SS`.
pub fn parse_flexible_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok()
}

/// Rewrite the value of an `<input type="datetime-local">`
/// (`YYYY-MM-DDTHH:MM`) into the space-separated, seconds-bearing form
/// the API expects.
pub fn normalize_datetime_local(raw: &str) -> String {
    let value = raw.trim().replacen('T', " ", 1);
    // datetime-local omits seconds unless the user typed them
    if value.len() == 16 {
        format!("{}:00", value)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_tag_roundtrip() {
        assert_eq!(Role::from_tag("admin"), Role::Admin);
        assert_eq!(Role::from_tag("user"), Role::User);
        assert_eq!(Role::Admin.as_tag(), "admin");
    }

    #[test]
    fn test_unknown_role_gates_as_user() {
        assert_eq!(Role::from_tag("supervisor"), Role::User);
        assert_eq!(Role::from_tag(""), Role::User);
    }

    #[test]
    fn test_room_payload_has_no_id() {
        let room = Room {
            id: 5,
            name: "A".to_string(),
            room_type: "lab".to_string(),
            capacity: 12,
            is_active: true,
        };
        let body = serde_json::to_value(RoomPayload::from(&room)).unwrap();
        let obj = body.as_object().unwrap();
        assert!(!obj.contains_key("id"));
        assert_eq!(obj["name"], "A");
        assert_eq!(obj["type"], "lab");
        assert_eq!(obj["capacity"], serde_json::json!(12));
    }

    #[test]
    fn test_room_capacity_is_numeric_on_the_wire() {
        let payload = RoomPayload {
            name: "Studio".to_string(),
            room_type: "class".to_string(),
            capacity: 40,
            is_active: false,
        };
        let body = serde_json::to_value(&payload).unwrap();
        assert!(body["capacity"].is_i64());
    }

    #[test]
    fn test_booking_record_flattens_joined_names() {
        let raw = r#"{
            "id": 3, "room_id": 1, "user_id": 2,
            "start_time": "2026-03-01 09:00:00",
            "end_time": "2026-03-01 11:30:00",
            "purpose": "Thesis defense", "status": "approved",
            "room_name": "Lab 1", "user_name": "Rina"
        }"#;
        let record: BookingRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.booking.id, 3);
        assert_eq!(record.room_name, "Lab 1");
        assert_eq!(
            BookingStatus::from_tag(&record.booking.status),
            BookingStatus::Approved
        );
        assert_eq!(record.booking.duration_hours(), Some(2.5));
    }

    #[test]
    fn test_duration_accepts_both_datetime_formats() {
        let booking = Booking {
            id: 1,
            room_id: 1,
            user_id: 1,
            start_time: "2026-03-01T09:00:00Z".to_string(),
            end_time: "2026-03-01 10:00:00".to_string(),
            purpose: String::new(),
            status: "pending".to_string(),
        };
        assert_eq!(booking.duration_hours(), Some(1.0));
    }

    #[test]
    fn test_duration_rejects_garbage_and_empty_spans() {
        let mut booking = Booking {
            id: 1,
            room_id: 1,
            user_id: 1,
            start_time: "yesterday-ish".to_string(),
            end_time: "2026-03-01 10:00:00".to_string(),
            purpose: String::new(),
            status: "pending".to_string(),
        };
        assert_eq!(booking.duration_hours(), None);

        booking.start_time = "2026-03-01 10:00:00".to_string();
        assert_eq!(booking.duration_hours(), None);
    }

    #[test]
    fn test_normalize_datetime_local() {
        assert_eq!(normalize_datetime_local("2026-03-01T09:00"), "2026-03-01 09:00:00");
        assert_eq!(normalize_datetime_local("2026-03-01T09:00:30"), "2026-03-01 09:00:30");
    }

    #[test]
    fn test_api_error_body_accepts_both_keys() {
        let a: ApiErrorBody = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        let b: ApiErrorBody = serde_json::from_str(r#"{"message":"denied"}"#).unwrap();
        assert_eq!(a.error, "boom");
        assert_eq!(b.error, "denied");
    }

    #[test]
    fn test_user_role_serializes_lowercase() {
        let user = UserPayload {
            name: "Sari".to_string(),
            email: "sari@campus.test".to_string(),
            role: Role::Admin,
            password: String::new(),
        };
        let body = serde_json::to_value(&user).unwrap();
        assert_eq!(body["role"], "admin");
    }
}
