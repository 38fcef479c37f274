//! `msg_*!` output macros.
//!
//! Each macro prints one `Display` value, normally a [`Message`](super::Message),
//! with a status prefix: none for `msg_print!`, ✅ for `msg_success!`, ℹ️ for
//! `msg_info!` and ❌ on stderr for `msg_error!`. A trailing `true` pads the
//! line with blank lines.
//!
//! When `TASKDECK_DEBUG` or `RUST_LOG` is set the same text becomes a
//! `tracing` event instead, so it interleaves with the debug log.
//!
//! ```rust
//! use taskdeck::{msg_error, msg_success};
//! use taskdeck::libs::messages::Message;
//!
//! msg_success!(Message::TaskCreated("Water plants".to_string()));
//! msg_error!(Message::TaskTitleEmpty);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether output should be routed through `tracing`. Read once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKDECK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Sends one formatted line to `tracing` at `$level` or to `$out!`.
#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $out:ident, $fmt:literal, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!($fmt, $msg);
        } else {
            $out!($fmt, $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "{}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\n{}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\n✅ {}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\nℹ️ {}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(error, eprintln, "\n❌ {}\n", $msg)
    };
}
