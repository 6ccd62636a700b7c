use crate::api::use_api;
use crate::components::icons::{CalendarDays, DoorOpen, LogOut, RefreshCw};
use crate::components::tag::StatusTag;
use crate::session::use_session;
use crate::toast::use_toast;
use doorz_shared::{BookingRecord, Room};
use leptos::prelude::*;
use leptos::task::spawn_local;

mod form_state;
use form_state::BookingFormState;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let api = StoredValue::new(use_api());

    // 面板只看自己的预订，按会话里的用户 id 过滤
    let user_id = session.snapshot().user_id.unwrap_or_default();

    let (rooms, set_rooms) = signal(Vec::<Room>::new());
    let (bookings, set_bookings) = signal(Vec::<BookingRecord>::new());
    let (loading, set_loading) = signal(true);

    let load = move || {
        let client = api.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match client.get_rooms().await {
                // 停用的房间不可选
                Ok(data) => set_rooms.set(data.into_iter().filter(|room| room.is_active).collect()),
                Err(err) => toast.error(format!("Failed to load rooms: {}", err)),
            }
            match client.get_bookings(Some(user_id)).await {
                Ok(data) => set_bookings.set(data),
                Err(err) => toast.error(format!("Failed to load bookings: {}", err)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let form = BookingFormState::new();
    let (submitting, set_submitting) = signal(false);
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = match form.to_request(user_id) {
            Ok(request) => request,
            Err(msg) => {
                set_form_error.set(Some(msg));
                return;
            }
        };

        set_submitting.set(true);
        set_form_error.set(None);
        let client = api.get_value();
        spawn_local(async move {
            match client.create_booking(&request).await {
                Ok(done) => {
                    toast.success(done.message);
                    form.reset();
                    load();
                }
                // 时间段冲突会被服务端以 409 拒绝，消息原样提示
                Err(err) => set_form_error.set(Some(err.to_string())),
            }
            set_submitting.set(false);
        });
    };

    let display_name = move || session.get().name.unwrap_or_else(|| "there".to_string());
    let on_logout = move |_| session.clear();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-6xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <DoorOpen attr:class="text-primary h-6 w-6" />
                        <a class="btn btn-ghost text-xl">"Doorz"</a>
                        <span class="badge badge-neutral hidden md:inline-flex">
                            "Hi, " {display_name}
                        </span>
                    </div>
                    <div class="flex-none">
                        <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                            <LogOut attr:class="h-4 w-4" />
                            "Sign out"
                        </button>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    // 预订申请表单
                    <div class="card bg-base-100 shadow-xl h-fit">
                        <div class="card-body">
                            <h3 class="card-title gap-2">
                                <CalendarDays attr:class="h-5 w-5 text-primary" />
                                "Request a room"
                            </h3>

                            <form class="space-y-3 mt-2" on:submit=on_submit>
                                <Show when=move || form_error.get().is_some()>
                                    <div role="alert" class="alert alert-error text-sm py-2">
                                        <span>{move || form_error.get().unwrap_or_default()}</span>
                                    </div>
                                </Show>

                                <div class="form-control">
                                    <label class="label"><span class="label-text">"Room"</span></label>
                                    <select
                                        class="select select-bordered"
                                        prop:value=move || form.room_id.get()
                                        on:change=move |ev| form.room_id.set(event_target_value(&ev))
                                    >
                                        <option value="">"Choose a room"</option>
                                        <For
                                            each=move || rooms.get()
                                            key=|room| room.id
                                            children=move |room| {
                                                view! {
                                                    <option value=room.id.to_string()>
                                                        {room.name.clone()}
                                                        " · "
                                                        {room.capacity}
                                                        " seats"
                                                    </option>
                                                }
                                            }
                                        />
                                    </select>
                                </div>

                                <div class="form-control">
                                    <label class="label"><span class="label-text">"From"</span></label>
                                    <input
                                        type="datetime-local"
                                        class="input input-bordered"
                                        prop:value=move || form.start_time.get()
                                        on:input=move |ev| form.start_time.set(event_target_value(&ev))
                                    />
                                </div>

                                <div class="form-control">
                                    <label class="label"><span class="label-text">"Until"</span></label>
                                    <input
                                        type="datetime-local"
                                        class="input input-bordered"
                                        prop:value=move || form.end_time.get()
                                        on:input=move |ev| form.end_time.set(event_target_value(&ev))
                                    />
                                </div>

                                <div class="form-control">
                                    <label class="label"><span class="label-text">"Purpose"</span></label>
                                    <textarea
                                        class="textarea textarea-bordered"
                                        placeholder="Weekly seminar"
                                        prop:value=move || form.purpose.get()
                                        on:input=move |ev| form.purpose.set(event_target_value(&ev))
                                    ></textarea>
                                </div>

                                <div class="form-control mt-4">
                                    <button class="btn btn-primary" disabled=move || submitting.get()>
                                        {move || if submitting.get() {
                                            view! { <span class="loading loading-spinner"></span> "Submitting..." }.into_any()
                                        } else {
                                            "Submit request".into_any()
                                        }}
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>

                    // 我的预订列表
                    <div class="card bg-base-100 shadow-xl lg:col-span-2">
                        <div class="card-body p-0">
                            <div class="flex items-center justify-between p-6 pb-2">
                                <div>
                                    <h3 class="card-title">"My bookings"</h3>
                                    <p class="text-base-content/70 text-sm">
                                        "Requests you have submitted and their status."
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
                                            <th class="hidden md:table-cell">"When"</th>
                                            <th class="hidden lg:table-cell">"Purpose"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <Show when=move || bookings.with(|b| b.is_empty()) && !loading.get()>
                                            <tr>
                                                <td colspan="4" class="text-center py-8 text-base-content/50">
                                                    "You have no bookings yet."
                                                </td>
                                            </tr>
                                        </Show>
                                        <For
                                            each=move || bookings.get()
                                            key=|record| record.booking.id
                                            children=move |record| {
                                                view! {
                                                    <tr>
                                                        <td class="font-bold">{record.room_name.clone()}</td>
                                                        <td class="hidden md:table-cell font-mono text-xs">
                                                            {record.booking.start_time.clone()}
                                                            " → "
                                                            {record.booking.end_time.clone()}
                                                        </td>
                                                        <td class="hidden lg:table-cell text-sm opacity-70">
                                                            {record.booking.purpose.clone()}
                                                        </td>
                                                        <td><StatusTag status=record.booking.status.clone() /></td>
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
        </div>
    }
}
