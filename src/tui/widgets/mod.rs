pub mod counter;
pub mod header;
pub mod mode_switch;
pub mod statusbar;
