use crate::api::use_api;
use crate::components::icons::{CalendarDays, Check, DoorOpen, RefreshCw, Users, X};
use crate::components::navbar::{AdminNavbar, AdminShortcuts};
use crate::components::tag::StatusTag;
use crate::toast::use_toast;
use doorz_shared::protocol::BookingAction;
use doorz_shared::{BookingRecord, BookingStatus, DashboardStats};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();

    let (stats, set_stats) = signal(Option::<DashboardStats>::None);
    let (pending, set_pending) = signal(Vec::<BookingRecord>::new());
    let (loading, set_loading) = signal(true);

    let load = move || {
        let client = api.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match client.get_stats().await {
                Ok(data) => set_stats.set(Some(data)),
                Err(err) => toast.error(format!("Failed to load stats: {}", err)),
            }
            // 待审批队列直接取自预订列表
            match client.get_bookings(None).await {
                Ok(list) => set_pending.set(
                    list.into_iter()
                        .filter(|record| {
                            BookingStatus::from_tag(&record.booking.status)
                                == BookingStatus::Pending
                        })
                        .collect(),
                ),
                Err(err) => toast.error(format!("Failed to load bookings: {}", err)),
            }
            set_loading.set(false);
        });
    };

    // 初始加载
    Effect::new(move |_| load());

    let act = move |id: i64, action: BookingAction| {
        let client = api.get_value();
        spawn_local(async move {
            match client.update_booking_status(id, action).await {
                Ok(done) => {
                    toast.success(done.message);
                    load();
                }
                Err(err) => toast.error(format!("Failed to update booking: {}", err)),
            }
        });
    };

    let stat = move |pick: fn(&DashboardStats) -> i64| {
        stats.get().as_ref().map(pick).unwrap_or_default()
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <AdminNavbar />

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-figure text-primary">
                            <DoorOpen attr:class="inline-block w-8 h-8" />
                        </div>
                        <div class="stat-title">"Rooms"</div>
                        <div class="stat-value text-primary">{move || stat(|s| s.total_rooms)}</div>
                    </div>

                    <div class="stat">
                        <div class="stat-figure text-success">
                            <CalendarDays attr:class="inline-block w-8 h-8" />
                        </div>
                        <div class="stat-title">"In use today"</div>
                        <div class="stat-value text-success">{move || stat(|s| s.active_usage)}</div>
                    </div>

                    <div class="stat">
                        <div class="stat-figure text-secondary">
                            <Users attr:class="inline-block w-8 h-8" />
                        </div>
                        <div class="stat-title">"Total bookings"</div>
                        <div class="stat-value text-secondary">{move || stat(|s| s.total_bookings)}</div>
                    </div>

                    <div class="stat">
                        <div class="stat-title">"Pending requests"</div>
                        <div class="stat-value text-warning">{move || stat(|s| s.pending_requests)}</div>
                        <div class="stat-desc">"Waiting for review"</div>
                    </div>
                </div>

                <AdminShortcuts />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex items-center justify-between p-6 pb-2">
                            <div>
                                <h3 class="card-title">"Pending approvals"</h3>
                                <p class="text-base-content/70 text-sm">
                                    "Booking requests waiting for a decision."
                                </p>
                            </div>
                            <button
                                on:click=move |_| load()
                                disabled=move || loading.get()
                                class="btn btn-ghost btn-circle"
                            >
                                <RefreshCw attr:class=move || {
                                    if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" }
                                } />
                            </button>
                        </div>

                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Room"</th>
                                        <th>"Requested by"</th>
                                        <th class="hidden md:table-cell">"When"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || pending.with(|p| p.is_empty()) && !loading.get()>
                                        <tr>
                                            <td colspan="5" class="text-center py-8 text-base-content/50">
                                                "Nothing waiting for approval."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || pending.get()
                                        key=|record| record.booking.id
                                        children=move |record| {
                                            let id = record.booking.id;
                                            view! {
                                                <tr>
                                                    <td class="font-bold">{record.room_name.clone()}</td>
                                                    <td>{record.user_name.clone()}</td>
                                                    <td class="hidden md:table-cell font-mono text-xs">
                                                        {record.booking.start_time.clone()}
                                                        " → "
                                                        {record.booking.end_time.clone()}
                                                    </td>
                                                    <td><StatusTag status=record.booking.status.clone() /></td>
                                                    <td class="flex gap-1 justify-end">
                                                        <button
                                                            class="btn btn-success btn-sm gap-1"
                                                            on:click=move |_| act(id, BookingAction::Approve)
                                                        >
                                                            <Check attr:class="h-4 w-4" />
                                                            "Approve"
                                                        </button>
                                                        <button
                                                            class="btn btn-error btn-outline btn-sm gap-1"
                                                            on:click=move |_| act(id, BookingAction::Reject)
                                                        >
                                                            <X attr:class="h-4 w-4" />
                                                            "Reject"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
