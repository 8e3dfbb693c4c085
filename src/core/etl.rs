use crate::core::projector;
use crate::domain::model::ProjectionSummary;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ProjectionEngine<C: ConfigProvider> {
    config: C,
    monitor_enabled: bool,
}

impl<C: ConfigProvider> ProjectionEngine<C> {
    pub fn new(config: C) -> Self {
        let monitor_enabled = config.monitor_enabled();
        Self {
            config,
            monitor_enabled,
        }
    }

    pub fn new_with_monitoring(config: C, monitor_enabled: bool) -> Self {
        Self {
            config,
            monitor_enabled,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn run(&self) -> Result<ProjectionSummary> {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);
        let input_path = self.config.input_path();
        let output_path = self.config.output_path();

        tracing::info!("📖 Reading gazetteer from {}", input_path);
        monitor.log_stats("Start");

        let summary = projector::project(input_path, output_path)?;

        monitor.log_stats("Projection");
        tracing::info!(
            "💾 Wrote {} records to {} in {:?}",
            summary.records_written,
            output_path,
            summary.elapsed
        );
        monitor.log_final_stats();

        Ok(summary)
    }
}
