//! 房间表单状态模块
//!
//! 将零散的 signal 整合为 `RoomFormState` 结构体，负责：
//! - 数据的持有与重置
//! - 编辑时从已有房间载入
//! - 提交时转换为请求载荷（容量文本在这里强制为整数）

use doorz_shared::{Room, RoomPayload};
use leptos::prelude::*;

/// 房间表单状态
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合作为 Props 传递。
#[derive(Clone, Copy)]
pub struct RoomFormState {
    /// 正在编辑的房间 id；`None` 表示新建
    pub editing_id: RwSignal<Option<i64>>,
    pub name: RwSignal<String>,
    pub room_type: RwSignal<String>,
    /// 容量按原始文本持有，提交时解析
    pub capacity: RwSignal<String>,
    pub is_active: RwSignal<bool>,
}

impl RoomFormState {
    pub fn new() -> Self {
        Self {
            editing_id: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            room_type: RwSignal::new("class".to_string()),
            capacity: RwSignal::new(String::new()),
            is_active: RwSignal::new(true),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.editing_id.set(None);
        self.name.set(String::new());
        self.room_type.set("class".to_string());
        self.capacity.set(String::new());
        self.is_active.set(true);
    }

    /// 编辑已有房间：载入各字段（id 单独记下，不进入载荷）
    pub fn load(&self, room: &Room) {
        self.editing_id.set(Some(room.id));
        self.name.set(room.name.clone());
        self.room_type.set(room.room_type.clone());
        self.capacity.set(room.capacity.to_string());
        self.is_active.set(room.is_active);
    }

    /// 将表单状态转换为请求载荷
    ///
    /// 容量必须能解析为整数——线上永远不会出现字符串容量。
    pub fn to_payload(&self) -> Result<RoomPayload, String> {
        let name = self.name.get_untracked().trim().to_string();
        if name.is_empty() {
            return Err("Room name is required".to_string());
        }

        let capacity: i32 = self
            .capacity
            .get_untracked()
            .trim()
            .parse()
            .map_err(|_| "Capacity must be a whole number".to_string())?;

        Ok(RoomPayload {
            name,
            room_type: self.room_type.get_untracked(),
            capacity,
            is_active: self.is_active.get_untracked(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doorz_shared::Room;

    fn sample_room() -> Room {
        Room {
            id: 5,
            name: "A".to_string(),
            room_type: "lab".to_string(),
            capacity: 12,
            is_active: true,
        }
    }

    #[test]
    fn test_capacity_text_is_coerced_to_integer() {
        let form = RoomFormState::new();
        form.name.set("A".to_string());
        form.capacity.set("12".to_string());

        let payload = form.to_payload().unwrap();
        assert_eq!(payload.capacity, 12);

        let body = serde_json::to_value(&payload).unwrap();
        assert!(body["capacity"].is_i64());
    }

    #[test]
    fn test_non_numeric_capacity_is_rejected() {
        let form = RoomFormState::new();
        form.name.set("A".to_string());
        form.capacity.set("a lot".to_string());
        assert!(form.to_payload().is_err());
    }

    #[test]
    fn test_editing_keeps_id_out_of_the_payload() {
        let form = RoomFormState::new();
        form.load(&sample_room());
        assert_eq!(form.editing_id.get_untracked(), Some(5));

        let payload = form.to_payload().unwrap();
        let body = serde_json::to_value(&payload).unwrap();
        assert!(!body.as_object().unwrap().contains_key("id"));
        assert_eq!(body["name"], "A");
        assert_eq!(body["capacity"], serde_json::json!(12));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let form = RoomFormState::new();
        form.capacity.set("10".to_string());
        assert!(form.to_payload().is_err());
    }
}
