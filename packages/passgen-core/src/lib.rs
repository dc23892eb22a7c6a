#![forbid(unsafe_code)]

//! # Passgen core
//!
//! Generates random passwords in response to API gateway proxy events.
//!
//! The whole request flow is a single synchronous call to [handle], which
//! parses the request body, generates the password and formats the response.
//! Failures never escape [handle], they are converted into an error response.
//!
//! ## Modules
//!
//! - [config] - Handler configuration loaded from the environment
//! - [error] - Request handling errors
//! - [gateway] - API gateway request and response types
//! - [parameters] - Request body parameter parsing
//! - [password] - Password alphabet and random generation

pub mod config;
pub mod error;
pub mod gateway;
pub mod handler;
pub mod parameters;
pub mod password;

pub use handler::handle;
