//! App-wide client state shared through Dioxus context.
//!
//! Two pieces of state cross page boundaries: the authentication identity and
//! the toast queue. Both are provided once by `App` and read through the hooks
//! below. Page data is never shared; every view owns its own signal.

use crate::config::AppConfig;
use dioxus::prelude::*;
use crate::Route;
use synergysphere_core::{AuthContext, CurrentUser, Notice};

/// Installs the shared auth context and toast queue. Call once from the root component.
pub fn provide_app_state() {
    let config = use_context::<AppConfig>();
    use_context_provider(|| Signal::new(AuthContext::new()));
    let queue = use_context_provider(|| Signal::new(ToastQueue::default()));
    use_context_provider(|| Toasts {
        queue,
        duration_ms: config.toasts.duration_ms,
    });
}

/// Handle to the shared authentication context.
pub fn use_auth() -> Signal<AuthContext> {
    use_context::<Signal<AuthContext>>()
}

/// Snapshot of the signed-in user, if any.
pub fn use_current_user() -> Option<CurrentUser> {
    let auth = use_auth();
    let user = auth.read().current_user().cloned();
    user
}

/// Handle for showing toasts from any component.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Signs out, acknowledges it with a toast and returns to the landing page.
pub fn sign_out(mut auth: Signal<AuthContext>, toasts: Toasts, nav: Navigator) {
    auth.write().logout();
    toasts.show(Notice::logged_out());
    nav.push(Route::Home {});
}

/// A notice on screen, keyed so it can be dismissed.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notice });
        id
    }

    /// Removes the toast with `id`. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
    duration_ms: u32,
}

impl Toasts {
    /// Shows `notice` and schedules its removal after the configured delay.
    pub fn show(&self, notice: Notice) {
        tracing::debug!(title = %notice.title, "toast");
        let mut queue = self.queue;
        let id = queue.write().push(notice);
        let duration_ms = self.duration_ms;
        // Spawned on the root scope so navigation does not cancel the dismissal.
        spawn_forever(async move {
            sleep_ms(duration_ms).await;
            queue.write().dismiss(id);
        });
    }

    /// Shows `notice` when an operation produced one.
    pub fn show_opt(&self, notice: Option<Notice>) {
        if let Some(notice) = notice {
            self.show(notice);
        }
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    pub fn queue(&self) -> Signal<ToastQueue> {
        self.queue
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn dismiss_delay_elapses_on_native_targets() {
        let started = std::time::Instant::now();

        sleep_ms(5).await;

        assert!(started.elapsed() >= std::time::Duration::from_millis(5));
    }

    #[test]
    fn queue_keeps_arrival_order() {
        let mut queue = ToastQueue::default();

        let first = queue.push(Notice::new("One", ""));
        let second = queue.push(Notice::new("Two", ""));

        assert_ne!(first, second);
        let titles: Vec<_> = queue.toasts().iter().map(|t| t.notice.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notice::new("One", ""));
        queue.push(Notice::new("Two", ""));

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));

        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].notice.title, "Two");
    }
}
