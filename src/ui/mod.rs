pub mod components;
pub mod layout;
pub mod terminal;
pub mod theme;
