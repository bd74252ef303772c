use crate::core::{Pipeline, RemovalReport};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RemovalReport> {
        self.run_with_report(|_| {})
    }

    /// Hands the report to `on_report` once the layers are filtered, before
    /// anything is written, so a failed write still leaves the count visible.
    pub fn run_with_report<F>(&self, mut on_report: F) -> Result<RemovalReport>
    where
        F: FnMut(&RemovalReport),
    {
        tracing::info!("Starting layer removal...");

        // Extract
        let document = self.pipeline.extract()?;

        // Transform
        let result = self.pipeline.transform(document)?;
        tracing::info!(
            initial = result.report.initial_count,
            removed = result.report.removed(),
            "{}",
            result.report
        );
        on_report(&result.report);

        // Load
        if self.pipeline.dry_run() {
            tracing::info!("Dry run, leaving the file untouched");
        } else {
            let output_path = self.pipeline.load(&result)?;
            tracing::info!("Output saved to: {}", output_path);
        }

        Ok(result.report)
    }
}
