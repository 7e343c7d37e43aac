pub mod footer;
pub mod header;
pub mod hero;
pub mod product_grid;
pub mod recipe_modal;
pub mod share_panel;
pub mod toast;
