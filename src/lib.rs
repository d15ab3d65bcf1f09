pub mod array;
pub mod constants;
pub mod core;
pub mod dims;
pub mod logging;
pub mod maze;
pub mod settings;
