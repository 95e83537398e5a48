pub mod center;

pub use center::PageContent;
