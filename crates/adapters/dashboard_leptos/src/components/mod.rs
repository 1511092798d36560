mod history_chart;
mod nav;
mod notice;
mod readout;
mod uptime;

pub use history_chart::HistoryChartCanvas;
pub use nav::Nav;
pub use notice::NoticeArea;
pub use readout::Readout;
pub use uptime::Uptime;
