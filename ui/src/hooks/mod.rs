pub mod use_title;
pub mod use_window_listener;

pub use use_title::use_title;
pub use use_window_listener::use_window_listener;
