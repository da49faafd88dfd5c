//! Configuration management for dirlist.
//!
//! Defaults for the directory model ([`settings::Config`]) are stored as a
//! TOML file and loaded at startup.

pub mod settings;
