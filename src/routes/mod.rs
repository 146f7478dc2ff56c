//! HTTP handlers for the catalog API.

pub mod design;
