//! Configuration for the learnbyte API.
//!
//! Each submodule covers one concern, loaded from environment variables at
//! startup. Configuration is constructed once in [`crate::state::init_app_state`]
//! and passed into the application state; nothing reads the environment after
//! startup.

pub mod cors;
pub mod database;
pub mod jwt;
