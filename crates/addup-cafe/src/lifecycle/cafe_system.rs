use super::{CafeConfig, Stores};
use crate::clients::{AssignmentClient, ProfileClient, RosterClient, SubmissionClient};
use crate::progress::{ProgressPoller, ProgressView};
use crate::identity::Identity;
use crate::model::ClassroomId;
use tracing::{error, info};

/// Owns the running store actors and the domain clients wired on top of them.
///
/// ```ignore
/// let system = CafeSystem::new(CafeConfig::default());
/// let classroom = system.roster.create_classroom(&teacher, "Math 4A").await?;
/// // ...
/// system.shutdown().await?;
/// ```
pub struct CafeSystem {
    pub config: CafeConfig,
    pub roster: RosterClient,
    pub assignments: AssignmentClient,
    pub submissions: SubmissionClient,
    pub profiles: ProfileClient,
    pub progress: ProgressView,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CafeSystem {
    /// Starts every store actor. Must be called inside a Tokio runtime.
    pub fn new(config: CafeConfig) -> Self {
        let (stores, handles) = Stores::spawn(&config);
        info!(stores = handles.len(), "Store actors started");

        let submissions = SubmissionClient::new(&stores);
        let assignments = AssignmentClient::new(&stores, submissions.clone());
        let profiles = ProfileClient::new(&stores);
        let roster = RosterClient::new(
            &stores,
            assignments.clone(),
            submissions.clone(),
            config.roster_policy(),
        );
        let progress = ProgressView::new(&stores);

        Self {
            config,
            roster,
            assignments,
            submissions,
            profiles,
            progress,
            handles,
        }
    }

    /// Starts polling one classroom at the configured interval.
    pub fn watch_classroom(&self, teacher: Identity, classroom: ClassroomId) -> ProgressPoller {
        ProgressPoller::start(
            self.progress.clone(),
            teacher,
            classroom,
            self.config.poll_interval,
        )
    }

    /// Drops every client, which closes the store channels, then waits for the
    /// actors to drain and exit.
    ///
    /// Clients cloned out of the system keep their stores alive; drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cafe...");

        drop(self.roster);
        drop(self.assignments);
        drop(self.submissions);
        drop(self.profiles);
        drop(self.progress);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Cafe shutdown complete.");
        Ok(())
    }
}
