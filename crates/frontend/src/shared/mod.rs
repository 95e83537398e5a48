pub mod components;
pub mod dom;
pub mod lightbox;
