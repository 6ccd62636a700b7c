//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、各自的访问元数据，以及导航守卫的判定逻辑。

use crate::session::Session;
use doorz_shared::Role;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由，仅限未登录访问)
    #[default]
    Login,
    /// 普通用户面板
    UserDashboard,
    /// 管理面板
    AdminDashboard,
    /// 房间管理
    AdminRooms,
    /// 预订管理
    AdminBookings,
    /// 报表生成
    AdminReports,
    /// 用户管理
    AdminUsers,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// `/user` 与 `/admin` 是各自面板的别名；
    /// 未知路径一律落到登录页（catch-all 重定向）。
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/user" | "/user/dashboard" => Self::UserDashboard,
            "/admin" | "/admin/dashboard" => Self::AdminDashboard,
            "/admin/rooms" => Self::AdminRooms,
            "/admin/bookings" => Self::AdminBookings,
            "/admin/reports" => Self::AdminReports,
            "/admin/users" => Self::AdminUsers,
            _ => Self::Login,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::UserDashboard => "/user/dashboard",
            Self::AdminDashboard => "/admin/dashboard",
            Self::AdminRooms => "/admin/rooms",
            Self::AdminBookings => "/admin/bookings",
            Self::AdminReports => "/admin/reports",
            Self::AdminUsers => "/admin/users",
        }
    }

    /// 该路由是否需要认证
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login)
    }

    /// 该路由是否仅限未登录用户（登录页）
    pub fn guest_only(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 允许访问该路由的角色；空切片表示不做角色限制
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Self::Login => &[],
            Self::UserDashboard => &[Role::User],
            Self::AdminDashboard
            | Self::AdminRooms
            | Self::AdminBookings
            | Self::AdminReports
            | Self::AdminUsers => &[Role::Admin],
        }
    }

    /// 角色对应的落地面板
    pub fn dashboard_for(role: Role) -> Self {
        match role {
            Role::Admin => Self::AdminDashboard,
            Role::User => Self::UserDashboard,
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// 导航守卫
// =========================================================

/// 守卫判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// 放行目标路由
    Allow,
    /// 重定向到其他路由
    Redirect(AppRoute),
}

/// **核心守卫逻辑：三段式判定**
///
/// 1. 仅限访客的路由 + 已认证 -> 重定向到角色面板
/// 2. 需要认证的路由 + 未认证 -> 重定向到登录页
/// 3. 已认证但角色不允许 -> 重定向到角色面板
///
/// 守卫只读取本地会话，纯同步判定；真正的授权边界在 API 服务端。
pub fn evaluate_guard(target: AppRoute, session: &Session) -> GuardDecision {
    let authenticated = session.is_authenticated();

    if target.guest_only() && authenticated {
        return GuardDecision::Redirect(AppRoute::dashboard_for(session.role()));
    }

    if target.requires_auth() && !authenticated {
        return GuardDecision::Redirect(AppRoute::Login);
    }

    if authenticated {
        let allowed = target.allowed_roles();
        if !allowed.is_empty() && !allowed.contains(&session.role()) {
            return GuardDecision::Redirect(AppRoute::dashboard_for(session.role()));
        }
    }

    GuardDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest() -> Session {
        Session::default()
    }

    fn authenticated(role: &str) -> Session {
        Session {
            token: Some("iti-shield-secret-token-123".to_string()),
            role: Some(role.to_string()),
            user_id: Some(1),
            name: Some("Test".to_string()),
        }
    }

    #[test]
    fn test_paths_roundtrip() {
        for route in [
            AppRoute::Login,
            AppRoute::UserDashboard,
            AppRoute::AdminDashboard,
            AppRoute::AdminRooms,
            AppRoute::AdminBookings,
            AppRoute::AdminReports,
            AppRoute::AdminUsers,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn test_aliases_and_catch_all() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/user"), AppRoute::UserDashboard);
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::AdminDashboard);
        // unknown paths redirect to login
        assert_eq!(AppRoute::from_path("/does/not/exist"), AppRoute::Login);
    }

    #[test]
    fn test_unauthenticated_is_sent_to_login() {
        assert_eq!(
            evaluate_guard(AppRoute::UserDashboard, &guest()),
            GuardDecision::Redirect(AppRoute::Login)
        );
        assert_eq!(
            evaluate_guard(AppRoute::AdminRooms, &guest()),
            GuardDecision::Redirect(AppRoute::Login)
        );
        assert_eq!(evaluate_guard(AppRoute::Login, &guest()), GuardDecision::Allow);
    }

    #[test]
    fn test_authenticated_leaves_login_page() {
        assert_eq!(
            evaluate_guard(AppRoute::Login, &authenticated("admin")),
            GuardDecision::Redirect(AppRoute::AdminDashboard)
        );
        assert_eq!(
            evaluate_guard(AppRoute::Login, &authenticated("user")),
            GuardDecision::Redirect(AppRoute::UserDashboard)
        );
    }

    #[test]
    fn test_role_mismatch_redirects_to_own_dashboard() {
        // role=user trying to open an admin screen
        assert_eq!(
            evaluate_guard(AppRoute::AdminRooms, &authenticated("user")),
            GuardDecision::Redirect(AppRoute::UserDashboard)
        );
        // admin trying to open the user dashboard
        assert_eq!(
            evaluate_guard(AppRoute::UserDashboard, &authenticated("admin")),
            GuardDecision::Redirect(AppRoute::AdminDashboard)
        );
    }

    #[test]
    fn test_matching_role_is_allowed() {
        assert_eq!(
            evaluate_guard(AppRoute::AdminReports, &authenticated("admin")),
            GuardDecision::Allow
        );
        assert_eq!(
            evaluate_guard(AppRoute::UserDashboard, &authenticated("user")),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_unknown_role_gates_as_user() {
        // the fall-through branch: anything that is not "admin" lands on
        // the user dashboard
        assert_eq!(
            evaluate_guard(AppRoute::AdminDashboard, &authenticated("supervisor")),
            GuardDecision::Redirect(AppRoute::UserDashboard)
        );
        assert_eq!(
            evaluate_guard(AppRoute::UserDashboard, &authenticated("supervisor")),
            GuardDecision::Allow
        );
    }
}
