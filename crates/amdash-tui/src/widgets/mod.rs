//! Ratatui widgets shared by the amdash screens.

pub mod command_bar;
pub mod event_table;
pub mod help;
pub mod nav_bar;
pub mod stat_card;
