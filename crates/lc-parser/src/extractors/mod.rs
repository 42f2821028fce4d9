//! Language extractors. Only Go is modeled.

pub mod go;
