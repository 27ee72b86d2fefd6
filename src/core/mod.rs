pub mod classification;
pub mod description;
pub mod etl;
pub mod pipeline;
pub mod taxonomy;
pub mod turtle;

pub use crate::domain::model::{Extracted, Taxonomy, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
