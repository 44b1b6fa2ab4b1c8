pub mod contacts;
pub mod screen;
