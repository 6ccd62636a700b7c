use crate::api::use_api;
use crate::components::icons::ShieldCheck;
use crate::session::use_session;
use crate::toast::use_toast;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use doorz_shared::{LoginRequest, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let toast = use_toast();
    let api = StoredValue::new(use_api());

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (backend_down, set_backend_down) = signal(false);

    // Probe the backend once so a dead API shows up before the first
    // failed login attempt.
    Effect::new(move |_| {
        let client = api.get_value();
        spawn_local(async move {
            set_backend_down.set(client.ping().await.is_err());
        });
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let client = api.get_value();
        spawn_local(async move {
            let credentials = LoginRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            match client.login(&credentials).await {
                Ok(granted) => {
                    let role = Role::from_tag(&granted.role);
                    toast.success(format!("Signed in as {}", granted.name));
                    session.establish(&granted);
                    router.navigate(AppRoute::dashboard_for(role).to_path());
                }
                Err(err) => {
                    let message = if err.is_unauthorized() {
                        "Invalid email or password.".to_string()
                    } else {
                        err.to_string()
                    };
                    set_error_msg.set(Some(message));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Doorz"</h1>
                        <p class="text-base-content/70">
                            "Sign in to manage rooms and bookings"
                        </p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || backend_down.get()>
                            <div role="alert" class="alert alert-warning text-sm py-2">
                                <span>"The booking service is not reachable right now."</span>
                            </div>
                        </Show>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@campus.test"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
