//! Doorz 管理前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `session`: 会话状态管理
//! - `api`: HTTP 客户端与各资源服务
//! - `components`: UI 组件层

mod api;
mod error;
mod session;
mod toast;

mod components {
    pub mod admin {
        pub mod bookings;
        pub mod dashboard;
        pub mod reports;
        pub mod rooms;
        pub mod users;
    }
    mod icons;
    pub mod login;
    mod navbar;
    mod tag;
    pub mod user_dashboard;
}

// 原生 Web API 封装模块
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use std::sync::Arc;

use crate::api::ApiClient;
use crate::components::admin::bookings::AdminBookingsPage;
use crate::components::admin::dashboard::AdminDashboardPage;
use crate::components::admin::reports::AdminReportsPage;
use crate::components::admin::rooms::AdminRoomsPage;
use crate::components::admin::users::AdminUsersPage;
use crate::components::login::LoginPage;
use crate::components::user_dashboard::UserDashboardPage;
use crate::session::SessionContext;
use crate::toast::{ToastContext, ToastHost};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet, use_router};

use leptos::prelude::*;

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::UserDashboard => view! { <UserDashboardPage /> }.into_any(),
        AppRoute::AdminDashboard => view! { <AdminDashboardPage /> }.into_any(),
        AppRoute::AdminRooms => view! { <AdminRoomsPage /> }.into_any(),
        AppRoute::AdminBookings => view! { <AdminBookingsPage /> }.into_any(),
        AppRoute::AdminReports => view! { <AdminReportsPage /> }.into_any(),
        AppRoute::AdminUsers => view! { <AdminUsersPage /> }.into_any(),
    }
}

/// 构造 API 客户端并注入 Context
///
/// 传输层只发出"未授权"事件；跳转到登录页由这里注入的回调决定。
#[component]
fn ApiProvider(children: Children) -> impl IntoView {
    let session = crate::session::use_session();
    let router = use_router();

    let api = ApiClient::from_env(
        session,
        Arc::new(move || router.navigate(AppRoute::Login.to_path())),
    );
    provide_context(api);

    children()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 会话上下文（从 LocalStorage 恢复）
    let session = SessionContext::new();
    provide_context(session);

    // 2. 全局通知
    let toasts = ToastContext::new();
    provide_context(toasts);

    view! {
        // 3. 路由器组件：注入会话实现守卫
        <Router session=session>
            // 4. API 客户端：注入会话与未授权回调
            <ApiProvider>
                <ToastHost />
                <RouterOutlet matcher=route_matcher />
            </ApiProvider>
        </Router>
    }
}
