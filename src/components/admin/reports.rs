use crate::api::use_api;
use crate::components::icons::{BarChart3, Download};
use crate::components::navbar::AdminNavbar;
use crate::toast::use_toast;
use doorz_shared::ReportFiles;
use leptos::prelude::*;
use leptos::task::spawn_local;

const MONTHS: [(&str, &str); 12] = [
    ("1", "January"),
    ("2", "February"),
    ("3", "March"),
    ("4", "April"),
    ("5", "May"),
    ("6", "June"),
    ("7", "July"),
    ("8", "August"),
    ("9", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

#[component]
pub fn AdminReportsPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();

    let (month, set_month) = signal("1".to_string());
    let (year, set_year) = signal(String::new());
    let (generating, set_generating) = signal(false);
    let (report, set_report) = signal(Option::<ReportFiles>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let month_num: u32 = match month.get().parse() {
            Ok(m) => m,
            Err(_) => return,
        };
        let year_num: i32 = match year.get().trim().parse() {
            Ok(y) => y,
            Err(_) => {
                toast.error("Year must be a number, e.g. 2026");
                return;
            }
        };

        set_generating.set(true);
        set_report.set(None);
        let client = api.get_value();
        spawn_local(async move {
            match client.generate_report(month_num, year_num).await {
                Ok(files) => {
                    toast.success(files.message.clone());
                    set_report.set(Some(files));
                }
                Err(err) => toast.error(format!("Failed to generate report: {}", err)),
            }
            set_generating.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <AdminNavbar />

                <div class="card bg-base-100 shadow-xl max-w-2xl">
                    <div class="card-body">
                        <h3 class="card-title gap-2">
                            <BarChart3 attr:class="h-5 w-5 text-primary" />
                            "Monthly usage report"
                        </h3>
                        <p class="text-base-content/70 text-sm">
                            "Builds CSV and JSON files with approved usage per room "
                            "for the selected month."
                        </p>

                        <form class="flex flex-wrap items-end gap-4 mt-4" on:submit=on_submit>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Month"</span></label>
                                <select
                                    class="select select-bordered"
                                    prop:value=month
                                    on:change=move |ev| set_month.set(event_target_value(&ev))
                                >
                                    {MONTHS
                                        .into_iter()
                                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Year"</span></label>
                                <input
                                    type="number"
                                    class="input input-bordered w-32"
                                    placeholder="2026"
                                    prop:value=year
                                    on:input=move |ev| set_year.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <button class="btn btn-primary" disabled=move || generating.get()>
                                {move || if generating.get() {
                                    view! { <span class="loading loading-spinner"></span> "Generating..." }.into_any()
                                } else {
                                    "Generate".into_any()
                                }}
                            </button>
                        </form>

                        <Show when=move || report.get().is_some()>
                            {move || {
                                report
                                    .get()
                                    .map(|files| {
                                        view! {
                                            <div class="alert alert-success mt-4 flex-col items-start gap-3">
                                                <span>{files.message.clone()}</span>
                                                <div class="flex gap-2">
                                                    <a
                                                        class="btn btn-sm gap-2"
                                                        href=files.download_url_csv.clone()
                                                        target="_blank"
                                                    >
                                                        <Download attr:class="h-4 w-4" />
                                                        {files.csv_file_name.clone()}
                                                    </a>
                                                    <a
                                                        class="btn btn-sm gap-2"
                                                        href=files.download_url_json.clone()
                                                        target="_blank"
                                                    >
                                                        <Download attr:class="h-4 w-4" />
                                                        {files.json_file_name.clone()}
                                                    </a>
                                                </div>
                                            </div>
                                        }
                                    })
                            }}
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
