//! Period Completeness - calendar period model and completeness aggregation
//!
//! This crate implements the period codec (parsing, conversion, navigation of
//! compact period strings such as `2020Q1` or `2020NovQ2`) and the aggregation
//! of per-period form completeness counts into period/form/month groups.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
