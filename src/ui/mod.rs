pub mod details;
pub mod panels;
pub mod plot;
pub mod table;
