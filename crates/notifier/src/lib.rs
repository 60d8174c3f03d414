//! Render lifecycle notifications delivered to Telegram.
//!
//! The render pipeline calls [`TelegramNotifier::notify`] at `prerender`,
//! `postrender` and `error`. Formatting lives in [`formatter`] and never fails;
//! delivery is a single Bot API request whose failure is handed back to the caller.

pub mod formatter;
pub mod telegram;

pub use formatter::format_message;
pub use telegram::TelegramNotifier;
