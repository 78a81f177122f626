//! Worker thread owning the experiment repository
//!
//! A `rusqlite` connection is `Send` but not `Sync`, and repository calls are
//! the only blocking operations in the recorder. The worker takes ownership
//! of the repository, serves requests one at a time from a channel, and
//! answers each over a oneshot reply. Dropping the request sender ends the
//! loop and releases the connection.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use tokio::sync::oneshot;
use tracing::debug;

use crate::app::models::{ExperimentFilter, ExperimentId, ExperimentMeta, ExperimentSummary, Triple};
use crate::app::services::experiment_repository::{ExperimentRepository, RepositoryError};

/// One repository request with its reply channel
#[derive(Debug)]
pub enum Request {
    Create {
        meta: ExperimentMeta,
        triples: Vec<Triple>,
        reply: oneshot::Sender<Result<ExperimentId, RepositoryError>>,
    },
    Find {
        filter: ExperimentFilter,
        reply: oneshot::Sender<Result<Vec<ExperimentSummary>, RepositoryError>>,
    },
    Fetch {
        experiment_id: ExperimentId,
        reply: oneshot::Sender<Result<Vec<Triple>, RepositoryError>>,
    },
}

/// Handle to the connection-owning worker thread
#[derive(Debug)]
pub struct RepositoryWorker {
    sender: mpsc::Sender<Request>,
    handle: JoinHandle<()>,
}

impl RepositoryWorker {
    /// Move the repository onto a dedicated thread and start serving requests
    pub fn spawn(mut repository: ExperimentRepository) -> Self {
        let (sender, receiver) = mpsc::channel::<Request>();

        let handle = thread::spawn(move || {
            while let Ok(request) = receiver.recv() {
                match request {
                    Request::Create {
                        meta,
                        triples,
                        reply,
                    } => {
                        let result = repository.create_experiment(&meta, &triples);
                        // A dropped reply means the caller gave up; the work
                        // is already committed or rolled back either way
                        let _ = reply.send(result);
                    }
                    Request::Find { filter, reply } => {
                        let _ = reply.send(repository.find_experiments(&filter));
                    }
                    Request::Fetch {
                        experiment_id,
                        reply,
                    } => {
                        let _ = reply.send(repository.fetch_measurements(experiment_id));
                    }
                }
            }
            debug!("repository worker shutting down, releasing connection");
        });

        Self { sender, handle }
    }

    /// Submit a request to the worker
    pub fn submit(&self, request: Request) -> Result<(), mpsc::SendError<Request>> {
        self.sender.send(request)
    }

    /// Close the request channel and wait for the worker to finish
    pub fn join(self) {
        drop(self.sender);
        // A panicked worker already surfaced its failure to every caller as
        // a closed reply channel
        let _ = self.handle.join();
    }
}
