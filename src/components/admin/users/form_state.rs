//! 账户表单状态模块
//!
//! 与房间表单同一套模式：持有、重置、载入、转换。
//! 新建账户必须给密码；编辑时留空表示保持原密码。

use doorz_shared::{Role, User, UserPayload};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct UserFormState {
    /// 正在编辑的用户 id；`None` 表示新建
    pub editing_id: RwSignal<Option<i64>>,
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    /// 角色标签（select 的原始值）
    pub role: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl UserFormState {
    pub fn new() -> Self {
        Self {
            editing_id: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            role: RwSignal::new(Role::User.as_tag().to_string()),
            password: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.editing_id.set(None);
        self.name.set(String::new());
        self.email.set(String::new());
        self.role.set(Role::User.as_tag().to_string());
        self.password.set(String::new());
    }

    pub fn load(&self, user: &User) {
        self.editing_id.set(Some(user.id));
        self.name.set(user.name.clone());
        self.email.set(user.email.clone());
        self.role.set(user.role.as_tag().to_string());
        // 密码从不回填
        self.password.set(String::new());
    }

    pub fn to_payload(&self) -> Result<UserPayload, String> {
        let name = self.name.get_untracked().trim().to_string();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }

        let email = self.email.get_untracked().trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err("A valid email is required".to_string());
        }

        let password = self.password.get_untracked();
        if self.editing_id.get_untracked().is_none() && password.is_empty() {
            return Err("A password is required for new accounts".to_string());
        }

        Ok(UserPayload {
            name,
            email,
            role: Role::from_tag(&self.role.get_untracked()),
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UserFormState {
        let form = UserFormState::new();
        form.name.set("Rina".to_string());
        form.email.set("rina@campus.test".to_string());
        form
    }

    #[test]
    fn test_new_account_requires_password() {
        let form = filled();
        assert!(form.to_payload().is_err());

        form.password.set("secret".to_string());
        assert!(form.to_payload().is_ok());
    }

    #[test]
    fn test_editing_allows_empty_password() {
        let form = filled();
        form.editing_id.set(Some(3));
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.password, "");
    }

    #[test]
    fn test_unknown_role_tag_becomes_user() {
        let form = filled();
        form.editing_id.set(Some(3));
        form.role.set("supervisor".to_string());
        assert_eq!(form.to_payload().unwrap().role, Role::User);
    }

    #[test]
    fn test_email_must_look_like_one() {
        let form = filled();
        form.editing_id.set(Some(3));
        form.email.set("not-an-email".to_string());
        assert!(form.to_payload().is_err());
    }
}
