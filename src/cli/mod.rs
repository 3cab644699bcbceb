//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod history;
pub mod purse;
pub mod transfer;

pub use history::handle_history_command;
pub use purse::{
    handle_add_command, handle_list_command, handle_lock_command, handle_show_command,
};
pub use transfer::handle_transfer_command;
