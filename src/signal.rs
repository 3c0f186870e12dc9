//! Process signal setup
//!
//! The interrupt handler never touches the address book. It only flips a
//! [`ShutdownToken`], which the menu loop polls between actions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// Shared flag telling the session to stop before its next action
#[derive(Clone, Debug, Default)]
pub struct ShutdownToken {
    requested: Arc<AtomicBool>,
}

impl ShutdownToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

#[cfg(unix)]
static INTERRUPT_TOKEN: OnceLock<ShutdownToken> = OnceLock::new();

#[cfg(unix)]
const INTERRUPT_MESSAGE: &[u8] = b"CTRL+C pressed, will exit after this action is completed\n";

/// Restore default SIGPIPE handling so `addrbook --list | head` exits quietly
#[cfg(unix)]
pub fn setup_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
pub fn setup_sigpipe() {
    // Windows doesn't have SIGPIPE
}

#[cfg(unix)]
extern "C" fn on_interrupt(_signum: libc::c_int) {
    // Only async-signal-safe work here: an atomic store and write(2)
    if let Some(token) = INTERRUPT_TOKEN.get() {
        token.request();
    }
    unsafe {
        libc::write(
            libc::STDOUT_FILENO,
            INTERRUPT_MESSAGE.as_ptr() as *const libc::c_void,
            INTERRUPT_MESSAGE.len(),
        );
    }
}

/// Route SIGINT to `token`
///
/// Only the first token installed is used; later calls are ignored.
#[cfg(unix)]
pub fn install_interrupt_handler(token: &ShutdownToken) {
    if INTERRUPT_TOKEN.set(token.clone()).is_err() {
        return;
    }
    unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        action.sa_sigaction = on_interrupt as extern "C" fn(libc::c_int) as libc::sighandler_t;
        // Restart interrupted reads so the current prompt still completes
        action.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&mut action.sa_mask);
        libc::sigaction(libc::SIGINT, &action, std::ptr::null_mut());
    }
}

#[cfg(not(unix))]
pub fn install_interrupt_handler(_token: &ShutdownToken) {
    // No handler: Ctrl+C terminates the process without saving
}
