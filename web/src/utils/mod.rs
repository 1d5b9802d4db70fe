pub mod date;
pub mod scroll;
