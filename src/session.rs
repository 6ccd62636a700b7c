//! 会话模块
//!
//! 管理登录会话（token + 角色），与路由系统解耦。
//! 路由守卫与 HTTP 客户端都通过注入的 `SessionContext` 读取会话，
//! 而不是各自直接访问全局存储。

use crate::web::LocalStorage;
use doorz_shared::{LoginResponse, Role};
use leptos::prelude::*;

const STORAGE_TOKEN_KEY: &str = "token";
const STORAGE_ROLE_KEY: &str = "role";
const STORAGE_USER_ID_KEY: &str = "user_id";
const STORAGE_NAME_KEY: &str = "name";

/// 会话快照
///
/// 访问控制只由 `token` 与 `role` 两个值驱动；`user_id` 和 `name`
/// 来自登录响应，仅用于展示和查询过滤。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<String>,
    pub user_id: Option<i64>,
    pub name: Option<String>,
}

impl Session {
    /// token 存在即视为已认证；过期只能由 401 响应推断
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// 当前角色标签的分类结果
    pub fn role(&self) -> Role {
        Role::from_tag(self.role.as_deref().unwrap_or(""))
    }
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: ReadSignal<Session>,
    set_state: WriteSignal<Session>,
}

impl SessionContext {
    /// 创建会话上下文，并从 LocalStorage 恢复上次的会话
    pub fn new() -> Self {
        let (state, set_state) = signal(Self::restore());
        Self { state, set_state }
    }

    fn restore() -> Session {
        Session {
            token: LocalStorage::get(STORAGE_TOKEN_KEY),
            role: LocalStorage::get(STORAGE_ROLE_KEY),
            user_id: LocalStorage::get(STORAGE_USER_ID_KEY).and_then(|v| v.parse().ok()),
            name: LocalStorage::get(STORAGE_NAME_KEY),
        }
    }

    /// 响应式读取会话
    pub fn get(&self) -> Session {
        self.state.get()
    }

    /// 非响应式读取（守卫在导航时同步使用）
    pub fn snapshot(&self) -> Session {
        self.state.get_untracked()
    }

    /// 登录成功后写入会话（storage + 内存）
    pub fn establish(&self, login: &LoginResponse) {
        LocalStorage::set(STORAGE_TOKEN_KEY, &login.token);
        LocalStorage::set(STORAGE_ROLE_KEY, &login.role);
        LocalStorage::set(STORAGE_USER_ID_KEY, &login.id.to_string());
        LocalStorage::set(STORAGE_NAME_KEY, &login.name);
        self.set_state.set(Session {
            token: Some(login.token.clone()),
            role: Some(login.role.clone()),
            user_id: Some(login.id),
            name: Some(login.name.clone()),
        });
    }

    /// 注销或 401：整体清空，绝不部分更新
    ///
    /// 不需要手动导航，路由服务会监听会话变化并自动重定向。
    pub fn clear(&self) {
        LocalStorage::clear();
        self.set_state.set(Session::default());
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(token: Option<&str>, role: Option<&str>) -> Session {
        Session {
            token: token.map(String::from),
            role: role.map(String::from),
            user_id: None,
            name: None,
        }
    }

    #[test]
    fn test_presence_of_token_implies_authenticated() {
        assert!(!session(None, None).is_authenticated());
        assert!(session(Some("t"), None).is_authenticated());
    }

    #[test]
    fn test_role_classification_falls_back_to_user() {
        assert_eq!(session(Some("t"), Some("admin")).role(), Role::Admin);
        assert_eq!(session(Some("t"), Some("user")).role(), Role::User);
        assert_eq!(session(Some("t"), Some("lecturer")).role(), Role::User);
        assert_eq!(session(Some("t"), None).role(), Role::User);
    }
}
