pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod state;
pub mod status;
pub mod view;
