//! HTML template rendering handlers for the locator pages.

mod contact;
mod filters;
mod map;
mod table;

pub use contact::{contact_page_handler, contact_submit_handler};
pub use map::map_page_handler;
pub use table::table_page_handler;
