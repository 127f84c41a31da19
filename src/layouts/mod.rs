pub mod main_layout;
pub mod offline_layout;

pub use main_layout::MainLayout;
pub use offline_layout::OfflineLayout;
