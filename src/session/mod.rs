pub mod grid;
pub mod input;
pub mod layout;
pub mod result;
