//! Page controllers, one per dashboard view.

pub mod history_chart;
pub mod logs;
pub mod realtime;
pub mod settings;
pub mod uptime;
