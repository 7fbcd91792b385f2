//! Tardiness Classification Engine
//!
//! This crate classifies school arrivals as present, late-but-present or
//! absent against an institution's cutoff time and medical-certificate
//! policy, and exposes the engine over a small JSON API.

#![warn(missing_docs)]

pub mod api;
pub mod classification;
pub mod config;
pub mod error;
pub mod models;
