pub mod config;
pub mod logging;

pub mod client;
pub mod history;
pub mod patterns;
pub mod reconcile;
pub mod record;
pub mod resource;
pub mod storage;
pub mod submit;
