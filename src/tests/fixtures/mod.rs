pub mod entertainer_input;
pub mod state;
