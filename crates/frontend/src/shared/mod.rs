pub mod clipboard;
pub mod components;
pub mod config;
pub mod icons;
pub mod list_utils;
pub mod notifications;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
pub mod submission;
pub mod theme;
