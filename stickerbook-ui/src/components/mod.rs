//! Shared UI components

pub mod action_bar;
pub mod album_grid;
pub mod button;
pub mod icons;
pub mod notice_toast;
pub mod slot_button;
pub mod status_bar;

pub use action_bar::ActionBarView;
pub use album_grid::AlbumGridView;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use icons::XIcon;
pub use notice_toast::NoticeToast;
pub use slot_button::SlotButtonView;
pub use status_bar::StatusBarView;
