use crate::core::filter::remove_named_layers;
use crate::core::{ConfigProvider, LottieDocument, Pipeline, Storage, TransformResult};
use crate::utils::error::{EtlError, Result};

/// Reads one Lottie file, strips the configured layer and writes it back in place.
pub struct WatermarkPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> WatermarkPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for WatermarkPipeline<S, C> {
    fn extract(&self) -> Result<LottieDocument> {
        let path = self.config.file_path();

        if !self.storage.exists(path) {
            return Err(EtlError::FileNotFound {
                path: path.to_string(),
            });
        }

        tracing::debug!("Reading animation from: {}", path);
        let bytes = self.storage.read_file(path)?;
        let content = String::from_utf8(bytes).map_err(|e| EtlError::InvalidDocument {
            message: format!("file is not valid UTF-8: {}", e),
        })?;

        let document = LottieDocument::from_json_str(&content)?;
        tracing::debug!("Parsed document with {} top-level keys", document.data.len());
        Ok(document)
    }

    fn transform(&self, document: LottieDocument) -> Result<TransformResult> {
        remove_named_layers(document, self.config.layer_name())
    }

    fn load(&self, result: &TransformResult) -> Result<String> {
        let path = self.config.file_path();
        let output = result.document.to_pretty_json()?;
        self.storage.write_file(path, output.as_bytes())?;
        tracing::debug!("Wrote {} bytes to: {}", output.len(), path);
        Ok(path.to_string())
    }

    fn dry_run(&self) -> bool {
        self.config.dry_run()
    }
}
