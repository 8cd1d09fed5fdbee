pub mod add_page;
pub mod create;
