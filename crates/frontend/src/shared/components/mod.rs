pub mod article;
pub mod thumbnail;

pub use thumbnail::{Gallery, ThumbnailFigure};
