//! Server application core modules.
//!
//! This module contains all server-side functionality for the recipe API, including HTTP
//! routing, session authentication, user accounts, and recipe persistence. Controllers sit on
//! top of services, which sit on top of sea-orm repositories.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
