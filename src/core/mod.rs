pub mod calendar;
pub mod command;
pub mod editor;
pub mod session;
