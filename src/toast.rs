//! 通知模块
//!
//! 全局 toast 上下文：视图层通过它报告服务调用的成败，
//! 通知入队后 3 秒自动消失。

use leptos::prelude::*;
use std::time::Duration;

/// 通知停留时长
const TOAST_DISMISS: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// 通知上下文
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|list| list.push(Toast { id, level, message }));

        // 到点自动清除
        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|list| list.retain(|t| t.id != id)),
            TOAST_DISMISS,
        );
    }
}

/// 从 Context 获取通知上下文
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// 通知渲染组件，应在 App 根部挂载一次
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_toast();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.level {
                        ToastLevel::Success => "alert alert-success shadow-lg",
                        ToastLevel::Error => "alert alert-error shadow-lg",
                    };
                    view! {
                        <div class=class>
                            <span>{toast.message.clone()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
