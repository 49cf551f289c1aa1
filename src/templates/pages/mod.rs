pub mod home;
pub mod letter;
pub mod listings;

pub use home::home_page;
pub use letter::letter_page;
pub use listings::{listings_page, ListingsVm};
