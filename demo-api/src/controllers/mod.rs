pub mod item_controller;
pub mod root_controller;
