pub mod filter_controls;
pub mod table;
