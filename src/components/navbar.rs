use crate::components::icons::{BarChart3, CalendarDays, DoorOpen, LogOut, Users};
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

/// 管理端导航项
const ADMIN_LINKS: [(&str, AppRoute); 5] = [
    ("Dashboard", AppRoute::AdminDashboard),
    ("Rooms", AppRoute::AdminRooms),
    ("Bookings", AppRoute::AdminBookings),
    ("Reports", AppRoute::AdminReports),
    ("Users", AppRoute::AdminUsers),
];

/// 管理端顶部导航栏
///
/// 注销只负责清空会话；跳转由路由服务对会话变化的监听完成。
#[component]
pub fn AdminNavbar() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let operator = move || session.get().name.unwrap_or_else(|| "Administrator".to_string());
    let on_logout = move |_| session.clear();

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <DoorOpen attr:class="text-primary h-6 w-6" />
                <a class="btn btn-ghost text-xl">"Doorz Admin"</a>
                <ul class="menu menu-horizontal px-1 hidden lg:flex">
                    {ADMIN_LINKS
                        .into_iter()
                        .map(|(label, target)| {
                            let active = move || router.current_route().get() == target;
                            view! {
                                <li>
                                    <a
                                        class=move || if active() { "active" } else { "" }
                                        on:click=move |_| router.navigate(target.to_path())
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="flex-none gap-2">
                <span class="badge badge-neutral hidden md:inline-flex">{operator}</span>
                <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                    <LogOut attr:class="h-4 w-4" />
                    "Sign out"
                </button>
            </div>
        </div>
    }
}

/// 管理页之间的快捷入口卡片（仪表盘使用）
#[component]
pub fn AdminShortcuts() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <button
                class="btn btn-outline h-24 flex-col gap-2"
                on:click=move |_| router.navigate(AppRoute::AdminRooms.to_path())
            >
                <DoorOpen attr:class="h-6 w-6" />
                "Manage rooms"
            </button>
            <button
                class="btn btn-outline h-24 flex-col gap-2"
                on:click=move |_| router.navigate(AppRoute::AdminBookings.to_path())
            >
                <CalendarDays attr:class="h-6 w-6" />
                "Review bookings"
            </button>
            <button
                class="btn btn-outline h-24 flex-col gap-2"
                on:click=move |_| router.navigate(AppRoute::AdminReports.to_path())
            >
                <BarChart3 attr:class="h-6 w-6" />
                "Monthly reports"
            </button>
            <button
                class="btn btn-outline h-24 flex-col gap-2"
                on:click=move |_| router.navigate(AppRoute::AdminUsers.to_path())
            >
                <Users attr:class="h-6 w-6" />
                "Manage accounts"
            </button>
        </div>
    }
}
