pub mod blocking;
pub mod save_dialog;
