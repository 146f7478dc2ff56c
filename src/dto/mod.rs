//! DTOs exposed by the design catalog API.

pub mod design;
