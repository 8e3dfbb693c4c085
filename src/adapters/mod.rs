// Adapters layer: concrete implementations for external systems the projector never sees.

pub mod archive;
