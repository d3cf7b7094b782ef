//! HTTP request handlers

pub mod inspections;
