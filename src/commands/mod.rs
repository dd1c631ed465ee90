//! CLI commands

pub mod contact;
pub mod info;
pub mod list;
pub mod new;
pub mod show;
