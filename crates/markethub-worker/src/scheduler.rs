//! Cron scheduler for periodic maintenance tasks.

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing::{error, info};

use markethub_core::config::WorkerConfig;
use markethub_core::error::AppError;

use crate::jobs::{CleanupJob, DigestJob};

/// Cron-based scheduler driving the digest and cleanup jobs.
pub struct CronScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
    /// Worker configuration (cron expressions).
    config: WorkerConfig,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler").finish()
    }
}

impl CronScheduler {
    /// Create a new cron scheduler.
    pub async fn new(config: WorkerConfig) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self { scheduler, config })
    }

    /// Register the digest and cleanup jobs on their cron schedules.
    pub async fn register_jobs(
        &self,
        digest: DigestJob,
        cleanup: CleanupJob,
    ) -> Result<(), AppError> {
        let digest_job = CronJob::new_async(self.config.digest_cron.as_str(), move |_id, _lock| {
            let digest = digest.clone();
            Box::pin(async move {
                if let Err(e) = digest.run().await {
                    error!(error = %e, "Daily digest job failed");
                }
            })
        })
        .map_err(|e| AppError::internal(format!("Failed to create digest schedule: {e}")))?;

        let cleanup_job =
            CronJob::new_async(self.config.cleanup_cron.as_str(), move |_id, _lock| {
                let cleanup = cleanup.clone();
                Box::pin(async move {
                    if let Err(e) = cleanup.run().await {
                        error!(error = %e, "Retention cleanup job failed");
                    }
                })
            })
            .map_err(|e| AppError::internal(format!("Failed to create cleanup schedule: {e}")))?;

        self.scheduler
            .add(digest_job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add digest job: {e}")))?;
        self.scheduler
            .add(cleanup_job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add cleanup job: {e}")))?;

        info!(
            digest = %self.config.digest_cron,
            cleanup = %self.config.cleanup_cron,
            "Scheduled jobs registered"
        );
        Ok(())
    }

    /// Start the scheduler.
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        info!("Cron scheduler shut down");
        Ok(())
    }
}
