pub mod etl;
pub mod filter;
pub mod pipeline;

pub use crate::domain::model::{LottieDocument, RemovalReport, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
