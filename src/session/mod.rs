pub mod store;
pub mod token;

pub use store::{Session, SessionStore};
pub use token::{session_cookie, token_from_cookie_header};
