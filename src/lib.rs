//! Showcase - directory and portfolio backend for service professionals
//!
//! Professionals register, publish a profile and a portfolio of projects;
//! visitors browse the directory by industry, location and specialty.
//!
//! - `domain` - profiles, projects, the directory engine, session state
//! - `ports` - repository and identity contracts
//! - `application` - command/query handlers and the client session context
//! - `adapters` - in-memory, hosted backend, and HTTP adapters
//! - `config` - environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
