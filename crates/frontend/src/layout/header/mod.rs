pub mod header;
pub mod navbar;

pub use header::Header;
pub use navbar::Navbar;
