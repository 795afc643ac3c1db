pub mod assets;
pub mod controller;
pub mod event;
pub mod step;
pub mod world;
