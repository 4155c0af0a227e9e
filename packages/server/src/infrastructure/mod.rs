//! Infrastructure layer: store adapters and data transfer objects.

pub mod dto;
pub mod repository;
