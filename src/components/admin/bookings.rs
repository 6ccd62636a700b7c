use crate::api::use_api;
use crate::components::icons::{Check, RefreshCw, X};
use crate::components::navbar::AdminNavbar;
use crate::components::tag::StatusTag;
use crate::toast::use_toast;
use doorz_shared::protocol::BookingAction;
use doorz_shared::{BookingRecord, BookingStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AdminBookingsPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();

    let (bookings, set_bookings) = signal(Vec::<BookingRecord>::new());
    let (loading, set_loading) = signal(true);

    let load = move || {
        let client = api.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match client.get_bookings(None).await {
                Ok(data) => set_bookings.set(data),
                Err(err) => toast.error(format!("Failed to load bookings: {}", err)),
            }
            set_loading.set(false);
        });
    };

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

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <AdminNavbar />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex items-center justify-between p-6 pb-2">
                            <div>
                                <h3 class="card-title">"Bookings"</h3>
                                <p class="text-base-content/70 text-sm">
                                    "Every booking request across all rooms."
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
                                        <th class="hidden md:table-cell">"Hours"</th>
                                        <th class="hidden lg:table-cell">"Purpose"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || bookings.with(|b| b.is_empty()) && !loading.get()>
                                        <tr>
                                            <td colspan="7" class="text-center py-8 text-base-content/50">
                                                "No bookings recorded yet."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || bookings.get()
                                        key=|record| record.booking.id
                                        children=move |record| {
                                            let id = record.booking.id;
                                            let pending = BookingStatus::from_tag(&record.booking.status)
                                                == BookingStatus::Pending;
                                            let hours = record
                                                .booking
                                                .duration_hours()
                                                .map(|h| format!("{:.1}", h))
                                                .unwrap_or_else(|| "—".to_string());
                                            view! {
                                                <tr>
                                                    <td class="font-bold">{record.room_name.clone()}</td>
                                                    <td>{record.user_name.clone()}</td>
                                                    <td class="hidden md:table-cell font-mono text-xs">
                                                        {record.booking.start_time.clone()}
                                                        " → "
                                                        {record.booking.end_time.clone()}
                                                    </td>
                                                    <td class="hidden md:table-cell">{hours}</td>
                                                    <td class="hidden lg:table-cell text-sm opacity-70">
                                                        {record.booking.purpose.clone()}
                                                    </td>
                                                    <td><StatusTag status=record.booking.status.clone() /></td>
                                                    <td class="flex gap-1 justify-end">
                                                        <Show when=move || pending>
                                                            <button
                                                                class="btn btn-success btn-sm btn-square"
                                                                on:click=move |_| act(id, BookingAction::Approve)
                                                            >
                                                                <Check attr:class="h-4 w-4" />
                                                            </button>
                                                            <button
                                                                class="btn btn-error btn-outline btn-sm btn-square"
                                                                on:click=move |_| act(id, BookingAction::Reject)
                                                            >
                                                                <X attr:class="h-4 w-4" />
                                                            </button>
                                                        </Show>
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
