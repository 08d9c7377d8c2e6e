mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod landing;
pub use landing::LandingView;

mod admin;
pub use admin::AdminView;
