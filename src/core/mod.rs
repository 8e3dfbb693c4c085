pub mod etl;
pub mod projector;

pub use crate::domain::model::{ProjectedRecord, ProjectionSummary};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
