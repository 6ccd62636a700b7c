use doorz_shared::BookingStatus;
use leptos::prelude::*;

/// 预订状态徽章
#[component]
pub fn StatusTag(#[prop(into)] status: String) -> impl IntoView {
    let class = match BookingStatus::from_tag(&status) {
        BookingStatus::Pending => "badge badge-warning badge-outline",
        BookingStatus::Approved => "badge badge-success",
        BookingStatus::Rejected => "badge badge-error badge-outline",
        BookingStatus::Unknown => "badge badge-ghost",
    };

    view! { <span class=class>{status}</span> }
}
