use crate::domain::model::{LottieDocument, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn file_path(&self) -> &str;
    fn layer_name(&self) -> &str;
    fn base_path(&self) -> &str;
    fn dry_run(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<LottieDocument>;
    fn transform(&self, document: LottieDocument) -> Result<TransformResult>;
    /// Persists the result and returns the path that was written.
    fn load(&self, result: &TransformResult) -> Result<String>;
    fn dry_run(&self) -> bool;
}
