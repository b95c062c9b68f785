//! Admin components for the application portal.

mod application_row;
mod application_table;
mod dashboard;
mod delete_modal;
mod edit_modal;
mod filter_bar;
mod image_preview;
mod login;
mod pagination;
mod stats_cards;
mod status_badge;

pub use application_row::ApplicationRow;
pub use application_table::ApplicationTable;
pub use dashboard::AdminDashboardPage;
pub use delete_modal::DeleteModal;
pub use edit_modal::EditModal;
pub use filter_bar::FilterBar;
pub use image_preview::ImagePreview;
pub use login::AdminLoginPage;
pub use pagination::PaginationFooter;
pub use stats_cards::StatsCards;
pub use status_badge::StatusBadge;
