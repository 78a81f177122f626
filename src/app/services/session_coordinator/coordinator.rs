//! Async facade over parser, repository worker and encoder

use tokio::sync::oneshot;
use tracing::{debug, info};

use super::worker::{RepositoryWorker, Request};
use crate::app::models::{ExperimentFilter, ExperimentId, ExperimentMeta, ExperimentSummary, Triple};
use crate::app::services::coordinate_parser;
use crate::app::services::experiment_repository::ExperimentRepository;
use crate::app::services::export_encoder;
use crate::{Error, Result};

/// Sequences the recorder's core operations
///
/// Owns the repository worker for the lifetime of a session. Operations do
/// not support mid-flight cancellation; a caller that times out must discard
/// the coordinator, which discards the underlying connection with it.
#[derive(Debug)]
pub struct SessionCoordinator {
    worker: RepositoryWorker,
}

impl SessionCoordinator {
    /// Take ownership of a repository and start the worker
    pub fn new(repository: ExperimentRepository) -> Self {
        Self {
            worker: RepositoryWorker::spawn(repository),
        }
    }

    /// Parse raw export text and store it with its metadata as one experiment
    ///
    /// Fails without touching storage when the text does not parse.
    pub async fn record_session(
        &self,
        raw_text: &str,
        meta: ExperimentMeta,
    ) -> Result<ExperimentId> {
        let triples = coordinate_parser::parse(raw_text)?;
        info!("parsed {} readings, storing experiment", triples.len());

        let (reply, response) = oneshot::channel();
        self.submit(Request::Create {
            meta,
            triples,
            reply,
        })?;
        let id = Self::await_reply(response).await??;

        info!("stored experiment {}", id);
        Ok(id)
    }

    /// Look up experiment summaries matching a filter
    pub async fn find_sessions(&self, filter: ExperimentFilter) -> Result<Vec<ExperimentSummary>> {
        let (reply, response) = oneshot::channel();
        self.submit(Request::Find { filter, reply })?;
        let summaries = Self::await_reply(response).await??;
        debug!("lookup returned {} summaries", summaries.len());
        Ok(summaries)
    }

    /// Fetch one experiment's readings in insertion order
    pub async fn fetch_session(&self, experiment_id: ExperimentId) -> Result<Vec<Triple>> {
        let (reply, response) = oneshot::channel();
        self.submit(Request::Fetch {
            experiment_id,
            reply,
        })?;
        Ok(Self::await_reply(response).await??)
    }

    /// Fetch one experiment's readings and render them as export text
    ///
    /// An unknown identity produces empty text, mirroring the repository's
    /// empty-sequence contract.
    pub async fn export_session(&self, experiment_id: ExperimentId) -> Result<String> {
        let triples = self.fetch_session(experiment_id).await?;
        Ok(export_encoder::encode(&triples))
    }

    /// Shut the worker down and release the database connection
    pub fn shutdown(self) {
        self.worker.join();
    }

    fn submit(&self, request: Request) -> Result<()> {
        self.worker
            .submit(request)
            .map_err(|_| Error::worker_unavailable())
    }

    async fn await_reply<T>(response: oneshot::Receiver<T>) -> Result<T> {
        response.await.map_err(|_| Error::worker_unavailable())
    }
}
