pub mod buffer;
pub mod input;
pub mod layout;
pub mod panels;
pub mod surface;
pub mod terminal;
