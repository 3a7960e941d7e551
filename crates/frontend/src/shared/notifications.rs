use contracts::shared::{NotificationKind, NotificationSlot};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Сервис единственного слота уведомлений
///
/// Новое сообщение заменяет предыдущее; каждое сообщение само исчезает через `ttl_ms`.
#[derive(Clone, Copy)]
pub struct NotificationService {
    slot: RwSignal<NotificationSlot>,
    ttl_ms: u32,
}

impl NotificationService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            slot: RwSignal::new(NotificationSlot::new()),
            ttl_ms,
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(NotificationKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NotificationKind::Error, text.into());
    }

    fn show(&self, kind: NotificationKind, text: String) {
        let mut id = 0;
        self.slot.update(|slot| id = slot.show(kind, text));

        let slot = self.slot;
        let ttl_ms = self.ttl_ms;
        spawn_local(async move {
            TimeoutFuture::new(ttl_ms).await;
            slot.update(|s| {
                s.dismiss(id);
            });
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.slot.update(|s| {
            s.dismiss(id);
        });
    }
}

fn box_style(kind: NotificationKind) -> String {
    let palette = match kind {
        NotificationKind::Success => "background: #d4edda; border: 2px solid #c3e6cb; color: #155724;",
        NotificationKind::Error => "background: #f8d7da; border: 2px solid #f5c6cb; color: #721c24;",
    };
    format!(
        "position: fixed; top: 20px; right: 20px; z-index: 9999; padding: 15px 20px; \
         border-radius: 5px; font-weight: bold; min-width: 300px; max-width: 500px; \
         box-shadow: 0 4px 12px rgba(0,0,0,0.2); {}",
        palette
    )
}

/// Компонент, отображающий текущее уведомление
#[component]
pub fn NotificationHost(service: NotificationService) -> impl IntoView {
    move || {
        service.slot.with(|slot| slot.current().cloned()).map(|n| {
            let id = n.id;
            view! {
                <div class=format!("import-message alert-{}", n.kind.as_str()) style=box_style(n.kind)>
                    <span style="margin-right: 10px;">{n.kind.icon()}</span>
                    {n.text}
                    <button
                        type="button"
                        style="float: right; background: none; border: none; font-size: 18px; cursor: pointer; margin-left: 10px;"
                        on:click=move |_| service.dismiss(id)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
