pub mod error;
pub mod fetch_hook;
pub mod toast;
