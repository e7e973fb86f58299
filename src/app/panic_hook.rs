use std::panic;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

static HOOK: Once = Once::new();
static SCREEN_OWNED: AtomicBool = AtomicBool::new(false);

/// Routes panic reports through `tracing`. While the UI owns the alternate
/// screen the default stderr report is suppressed, since it would land on
/// cells ratatui never repaints.
pub(crate) fn install_panic_hook() {
    HOOK.call_once(|| {
        let default_panic = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", %info, "panic");
            if !SCREEN_OWNED.load(Ordering::Acquire) {
                default_panic(info);
            }
        }));
    });
}

pub(crate) fn set_screen_owned(owned: bool) {
    SCREEN_OWNED.store(owned, Ordering::Release);
}
