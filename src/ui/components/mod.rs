pub mod result_panel;
pub mod typing_grid;
