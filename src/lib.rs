//! Command-line front end for the toy price predictor.
//!
//! Drives the same [`common::PredictionFormController`] as the browser page,
//! talking to the prediction service over `reqwest` and printing the rendered
//! form to the terminal.

pub mod cli;
pub mod client;
pub mod config;
pub mod render;
