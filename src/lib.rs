pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::archive::unpack_member;
pub use self::core::{
    etl::ProjectionEngine,
    projector::{project, project_stream},
};
pub use domain::model::{ProjectedRecord, ProjectionSummary};
pub use utils::error::{FilterError, Result};
