pub mod rules;
pub mod word;
