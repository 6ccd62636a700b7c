use crate::api::use_api;
use crate::components::icons::{Pencil, Plus, RefreshCw, Trash2};
use crate::components::navbar::AdminNavbar;
use crate::toast::use_toast;
use doorz_shared::{Room, RoomPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;

mod form_state;
use form_state::RoomFormState;

#[component]
pub fn AdminRoomsPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();

    let (rooms, set_rooms) = signal(Vec::<Room>::new());
    let (loading, set_loading) = signal(true);

    let load = move || {
        let client = api.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match client.get_rooms().await {
                Ok(data) => set_rooms.set(data),
                Err(err) => toast.error(format!("Failed to load rooms: {}", err)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    // 表单与弹窗
    let form = RoomFormState::new();
    let (dialog_open, set_dialog_open) = signal(false);
    let (saving, set_saving) = signal(false);
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if dialog_open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let open_create = move |_| {
        form.reset();
        set_form_error.set(None);
        set_dialog_open.set(true);
    };

    let open_edit = move |room: &Room| {
        form.load(room);
        set_form_error.set(None);
        set_dialog_open.set(true);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(msg) => {
                set_form_error.set(Some(msg));
                return;
            }
        };

        set_saving.set(true);
        let client = api.get_value();
        spawn_local(async move {
            let result = match form.editing_id.get_untracked() {
                Some(id) => client.update_room(id, &payload).await,
                None => client.create_room(&payload).await,
            };
            match result {
                Ok(done) => {
                    toast.success(done.message);
                    set_dialog_open.set(false);
                    form.reset();
                    load();
                }
                Err(err) => set_form_error.set(Some(err.to_string())),
            }
            set_saving.set(false);
        });
    };

    let toggle_active = move |room: Room| {
        let client = api.get_value();
        spawn_local(async move {
            let mut payload = RoomPayload::from(&room);
            payload.is_active = !room.is_active;
            match client.update_room(room.id, &payload).await {
                Ok(_) => load(),
                Err(err) => toast.error(format!("Failed to update room: {}", err)),
            }
        });
    };

    let delete_room = move |id: i64| {
        let client = api.get_value();
        spawn_local(async move {
            match client.delete_room(id).await {
                Ok(done) => {
                    toast.success(done.message);
                    set_rooms.update(|list| list.retain(|room| room.id != id));
                }
                // 有未结预订的房间会被服务端以 409 拒绝，消息原样提示
                Err(err) => toast.error(format!("Failed to delete room: {}", err)),
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
                                <h3 class="card-title">"Rooms"</h3>
                                <p class="text-base-content/70 text-sm">
                                    "Classrooms and labs available for booking."
                                </p>
                            </div>
                            <div class="flex gap-2">
                                <button
                                    on:click=move |_| load()
                                    disabled=move || loading.get()
                                    class="btn btn-ghost btn-circle"
                                >
                                    <RefreshCw attr:class=move || {
                                        if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" }
                                    } />
                                </button>
                                <button class="btn btn-primary gap-2" on:click=open_create>
                                    <Plus attr:class="h-4 w-4" />
                                    "Add room"
                                </button>
                            </div>
                        </div>

                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Type"</th>
                                        <th>"Capacity"</th>
                                        <th>"Active"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || rooms.with(|r| r.is_empty()) && !loading.get()>
                                        <tr>
                                            <td colspan="5" class="text-center py-8 text-base-content/50">
                                                "No rooms yet. Add one to get started."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || rooms.get()
                                        key=|room| room.id
                                        children=move |room| {
                                            let id = room.id;
                                            let for_edit = room.clone();
                                            let for_toggle = room.clone();
                                            view! {
                                                <tr>
                                                    <td class="font-bold">{room.name.clone()}</td>
                                                    <td>
                                                        <span class="badge badge-accent badge-outline">
                                                            {room.room_type.clone()}
                                                        </span>
                                                    </td>
                                                    <td>{room.capacity}</td>
                                                    <td>
                                                        <input
                                                            type="checkbox"
                                                            class="toggle toggle-success toggle-sm"
                                                            prop:checked=room.is_active
                                                            on:change=move |_| toggle_active(for_toggle.clone())
                                                        />
                                                    </td>
                                                    <td class="flex gap-1 justify-end">
                                                        <button
                                                            class="btn btn-ghost btn-sm btn-square"
                                                            on:click=move |_| open_edit(&for_edit)
                                                        >
                                                            <Pencil attr:class="h-4 w-4" />
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-sm btn-square text-error"
                                                            on:click=move |_| delete_room(id)
                                                        >
                                                            <Trash2 attr:class="h-4 w-4" />
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

            // 新建/编辑弹窗
            <dialog class="modal" node_ref=dialog_ref>
                <div class="modal-box">
                    <h3 class="font-bold text-lg mb-4">
                        {move || if form.editing_id.get().is_some() { "Edit room" } else { "Add room" }}
                    </h3>
                    <form class="space-y-4" on:submit=on_submit>
                        <Show when=move || form_error.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || form_error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Name"</span></label>
                            <input
                                type="text"
                                class="input input-bordered"
                                placeholder="Lab 1"
                                prop:value=move || form.name.get()
                                on:input=move |ev| form.name.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Type"</span></label>
                            <select
                                class="select select-bordered"
                                prop:value=move || form.room_type.get()
                                on:change=move |ev| form.room_type.set(event_target_value(&ev))
                            >
                                <option value="class">"Classroom"</option>
                                <option value="lab">"Laboratory"</option>
                                <option value="meeting">"Meeting room"</option>
                            </select>
                        </div>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Capacity"</span></label>
                            <input
                                type="number"
                                min="1"
                                class="input input-bordered"
                                placeholder="40"
                                prop:value=move || form.capacity.get()
                                on:input=move |ev| form.capacity.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-control">
                            <label class="label cursor-pointer justify-start gap-3">
                                <input
                                    type="checkbox"
                                    class="toggle toggle-success"
                                    prop:checked=move || form.is_active.get()
                                    on:change=move |ev| form.is_active.set(event_target_checked(&ev))
                                />
                                <span class="label-text">"Available for booking"</span>
                            </label>
                        </div>

                        <div class="modal-action">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| set_dialog_open.set(false)
                            >
                                "Cancel"
                            </button>
                            <button class="btn btn-primary" disabled=move || saving.get()>
                                {move || if saving.get() {
                                    view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                                } else {
                                    "Save room".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </dialog>
        </div>
    }
}
