pub mod answers;
pub mod handler;
pub mod listener;
pub mod static_files;
