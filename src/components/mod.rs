pub mod dashboard;
pub mod history_chips;
pub mod notice_modal;
pub mod palette;
pub mod result_panel;
pub mod search_bar;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use dashboard::{Dashboard, DashboardProps, LOADING_TEXT, TITLE};
pub use history_chips::{HistoryChips, HistoryChipsProps};
pub use notice_modal::{NoticeModal, NoticeModalProps};
pub use palette::Palette;
pub use result_panel::{ResultPanel, ResultPanelProps};
pub use search_bar::{SearchBar, SearchBarProps};

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";
