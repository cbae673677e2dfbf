pub mod config;

pub mod format;

pub mod layout;

pub mod rows;

pub mod table;

pub use table::{render, render_frame};
