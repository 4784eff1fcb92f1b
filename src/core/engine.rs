use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::{RunMonitor, RunPhase};

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
    monitor: RunMonitor,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting report run...");

        // Collect
        tracing::info!("📥 Collecting sources...");
        let matches = self.pipeline.collect().await?;
        tracing::info!("📥 Collected fragments from {} source(s)", matches.len());
        self.monitor.log_stats(RunPhase::Collect);

        // Render
        tracing::info!("🔄 Rendering report...");
        let report = self.pipeline.render(matches).await?;
        tracing::info!("🔄 Report is {} bytes", report.len());
        self.monitor.log_stats(RunPhase::Render);

        // Publish
        tracing::info!("💾 Publishing report...");
        let output_path = self.pipeline.publish(report).await?;
        tracing::info!("💾 Report saved to: {}", output_path);
        self.monitor.log_stats(RunPhase::Publish);

        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
