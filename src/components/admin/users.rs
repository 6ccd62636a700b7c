use crate::api::use_api;
use crate::components::icons::{Pencil, Plus, RefreshCw, Trash2};
use crate::components::navbar::AdminNavbar;
use crate::toast::use_toast;
use doorz_shared::{Role, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

mod form_state;
use form_state::UserFormState;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();

    let (users, set_users) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);

    let load = move || {
        let client = api.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match client.get_users().await {
                Ok(data) => set_users.set(data),
                Err(err) => toast.error(format!("Failed to load users: {}", err)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let form = UserFormState::new();
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

    let open_edit = move |user: &User| {
        form.load(user);
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
                Some(id) => client.update_user(id, &payload).await,
                None => client.create_user(&payload).await,
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

    let delete_user = move |id: i64| {
        let client = api.get_value();
        spawn_local(async move {
            match client.delete_user(id).await {
                Ok(done) => {
                    toast.success(done.message);
                    set_users.update(|list| list.retain(|user| user.id != id));
                }
                Err(err) => toast.error(format!("Failed to delete user: {}", err)),
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
                                <h3 class="card-title">"Accounts"</h3>
                                <p class="text-base-content/70 text-sm">
                                    "People who can sign in to the booking system."
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
                                    "Add account"
                                </button>
                            </div>
                        </div>

                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Email"</th>
                                        <th>"Role"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || users.with(|u| u.is_empty()) && !loading.get()>
                                        <tr>
                                            <td colspan="4" class="text-center py-8 text-base-content/50">
                                                "No accounts found."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || users.get()
                                        key=|user| user.id
                                        children=move |user| {
                                            let id = user.id;
                                            let for_edit = user.clone();
                                            let role_class = match user.role {
                                                Role::Admin => "badge badge-primary",
                                                Role::User => "badge badge-ghost",
                                            };
                                            view! {
                                                <tr>
                                                    <td class="font-bold">{user.name.clone()}</td>
                                                    <td class="font-mono text-sm opacity-70">{user.email.clone()}</td>
                                                    <td><span class=role_class>{user.role.as_tag()}</span></td>
                                                    <td class="flex gap-1 justify-end">
                                                        <button
                                                            class="btn btn-ghost btn-sm btn-square"
                                                            on:click=move |_| open_edit(&for_edit)
                                                        >
                                                            <Pencil attr:class="h-4 w-4" />
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-sm btn-square text-error"
                                                            on:click=move |_| delete_user(id)
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
                        {move || if form.editing_id.get().is_some() { "Edit account" } else { "Add account" }}
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
                                prop:value=move || form.name.get()
                                on:input=move |ev| form.name.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Email"</span></label>
                            <input
                                type="email"
                                class="input input-bordered"
                                placeholder="name@campus.test"
                                prop:value=move || form.email.get()
                                on:input=move |ev| form.email.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Role"</span></label>
                            <select
                                class="select select-bordered"
                                prop:value=move || form.role.get()
                                on:change=move |ev| form.role.set(event_target_value(&ev))
                            >
                                <option value="user">"User"</option>
                                <option value="admin">"Administrator"</option>
                            </select>
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">
                                    {move || if form.editing_id.get().is_some() {
                                        "New password (leave empty to keep current)"
                                    } else {
                                        "Password"
                                    }}
                                </span>
                            </label>
                            <input
                                type="password"
                                class="input input-bordered"
                                prop:value=move || form.password.get()
                                on:input=move |ev| form.password.set(event_target_value(&ev))
                            />
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
                                    "Save account".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </dialog>
        </div>
    }
}
