//! Recurring feed polling.
//!
//! Runs one cycle immediately, then registers a fixed-interval job with a
//! [`JobScheduler`]. Cycles never overlap: the watcher sits behind a mutex
//! and a tick that finds it busy is skipped.

use std::sync::Arc;
use std::time::Duration;

use careersignal_feed::{AlertToggle, CycleOutcome, FeedSource, Notifier, Presenter, Watcher};
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

pub type SharedWatcher<S, N, T, P> = Arc<Mutex<Watcher<S, N, T, P>>>;

/// Runs the first cycle now, then starts the recurring poll job.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive
/// for the lifetime of the process. Dropping it shuts down polling.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// the job cannot be registered, or the scheduler fails to start.
pub async fn start_polling<S, N, T, P>(
    watcher: SharedWatcher<S, N, T, P>,
    interval: Duration,
) -> Result<JobScheduler, JobSchedulerError>
where
    S: FeedSource + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    T: AlertToggle + Send + Sync + 'static,
    P: Presenter + Send + Sync + 'static,
{
    tracing::info!("scheduler: running initial cycle");
    run_tick(&watcher).await;

    let scheduler = JobScheduler::new().await?;
    register_poll_job(&scheduler, watcher, interval).await?;
    scheduler.start().await?;
    Ok(scheduler)
}

/// Register the fixed-interval feed poll.
async fn register_poll_job<S, N, T, P>(
    scheduler: &JobScheduler,
    watcher: SharedWatcher<S, N, T, P>,
    interval: Duration,
) -> Result<(), JobSchedulerError>
where
    S: FeedSource + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    T: AlertToggle + Send + Sync + 'static,
    P: Presenter + Send + Sync + 'static,
{
    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let watcher = Arc::clone(&watcher);

        Box::pin(async move {
            run_tick(&watcher).await;
        })
    })?;

    scheduler.add(job).await?;
    tracing::info!(
        interval_secs = interval.as_secs(),
        "scheduler: registered feed poll job"
    );
    Ok(())
}

/// Run one cycle unless another is still in flight.
///
/// Returns `None` when the tick was skipped.
pub(crate) async fn run_tick<S, N, T, P>(
    watcher: &SharedWatcher<S, N, T, P>,
) -> Option<CycleOutcome>
where
    S: FeedSource + Send + Sync,
    N: Notifier + Send,
    T: AlertToggle + Send,
    P: Presenter + Send,
{
    let Ok(mut guard) = watcher.try_lock() else {
        tracing::warn!("scheduler: previous cycle still running; skipping tick");
        return None;
    };

    tracing::debug!("scheduler: starting feed cycle");
    let outcome = guard.run_cycle().await;
    if let CycleOutcome::Completed(report) = &outcome {
        tracing::debug!(
            fetched_at = %report.fetched_at,
            alerts = report.alerts_sent,
            "scheduler: feed cycle finished"
        );
    }
    Some(outcome)
}
