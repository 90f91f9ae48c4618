//! Shared library module for the Cheonja app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod app;
pub mod clock;
pub mod dataset;
pub mod fonts;
pub mod message;
pub mod persistence;
pub mod state;
pub mod ui;

pub use self::app::CheonjaApp;
