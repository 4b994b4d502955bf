//! Console logging macros
//!
//! On wasm32 these go straight to `web_sys::console`, anywhere else they fall
//! back to stderr so the scene core can run under `cargo test`.
//!
//! Usage:
//! ```rust
//! use tilt_text_engine::console_log;
//!
//! let bodies = 14;
//! console_log!("scene ready with {} bodies", bodies);
//! ```

/// Informational message (`console.log`)
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            ::std::eprintln!("[log] {}", ::std::format!($($arg)*));
        }
    }};
}

/// Warning (`console.warn`)
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            ::std::eprintln!("[warn] {}", ::std::format!($($arg)*));
        }
    }};
}

/// Error (`console.error`)
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::error_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            ::std::eprintln!("[error] {}", ::std::format!($($arg)*));
        }
    }};
}
