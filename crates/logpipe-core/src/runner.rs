//! Pipeline Runner: chains filters and drives them from bounded channels
use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::event::LogEvent;
use crate::filter::Filter;
use crate::registry::FilterRegistry;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

/// Capacity of the input and debug output channels
pub const CHANNEL_CAPACITY: usize = 100;

pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
    pipeline_id: String,
}

impl FilterChain {
    pub fn new(filters: Vec<Box<dyn Filter>>) -> Self {
        let pipeline_id = if filters.is_empty() {
            "passthrough".to_string()
        } else {
            filters
                .iter()
                .map(|f| f.type_name())
                .collect::<Vec<_>>()
                .join("→")
        };

        Self { filters, pipeline_id }
    }

    /// Builds every configured filter up front; the first failure aborts.
    pub fn from_config(config: &PipelineConfig, registry: &FilterRegistry) -> Result<Self> {
        let mut filters = Vec::with_capacity(config.filter.len());
        for (index, spec) in config.filter.iter().enumerate() {
            let filter = registry.build(spec)?;
            tracing::debug!(index, filter_type = %spec.filter_type, "filter configured");
            filters.push(filter);
        }
        Ok(Self::new(filters))
    }

    /// Runs the event through every filter in configured order.
    pub fn apply(&self, event: &mut LogEvent) {
        for filter in &self.filters {
            filter.process(event);
        }
    }

    pub fn pipeline_id(&self) -> &str {
        &self.pipeline_id
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Spawns the worker task. Must be called from within a tokio runtime.
    pub fn start(self, debugch: bool) -> RunningPipeline {
        let run_id = Uuid::new_v4();
        let (input_tx, mut input_rx) = mpsc::channel::<LogEvent>(CHANNEL_CAPACITY);
        let (output_tx, output_rx) = if debugch {
            let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
            (Some(tx), Some(rx))
        } else {
            (None, None)
        };

        tracing::info!(
            %run_id,
            pipeline = %self.pipeline_id,
            debugch,
            version = crate::LOGPIPE_VERSION,
            "pipeline started"
        );

        let span = tracing::info_span!("pipeline", %run_id);
        let worker = tokio::spawn(
            async move {
                while let Some(mut event) = input_rx.recv().await {
                    self.apply(&mut event);
                    if let Some(tx) = &output_tx {
                        if tx.send(event).await.is_err() {
                            tracing::debug!("debug output receiver dropped");
                            break;
                        }
                    }
                }
                tracing::debug!("pipeline worker stopped");
            }
            .instrument(span),
        );

        RunningPipeline {
            run_id,
            input: input_tx,
            output: output_rx,
            worker,
        }
    }
}

/// A started pipeline plus the inject/await primitives used by tests.
pub struct RunningPipeline {
    run_id: Uuid,
    input: mpsc::Sender<LogEvent>,
    output: Option<mpsc::Receiver<LogEvent>>,
    worker: JoinHandle<()>,
}

impl RunningPipeline {
    /// Loads a YAML config, builds the chain and starts it.
    pub fn from_yaml(source: &str, registry: &FilterRegistry) -> Result<Self> {
        let config = PipelineConfig::from_yaml(source)?;
        let chain = FilterChain::from_config(&config, registry)?;
        Ok(chain.start(config.debugch))
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Enqueues an event, waiting for room if the input channel is full.
    pub async fn inject_event(&self, event: LogEvent) -> Result<()> {
        self.input
            .send(event)
            .await
            .map_err(|_| PipelineError::ChannelClosed)
    }

    /// Waits for the next filtered event on the debug output channel.
    pub async fn await_output_event(&mut self, timeout: Duration) -> Result<LogEvent> {
        let output = self
            .output
            .as_mut()
            .ok_or(PipelineError::DebugChannelDisabled)?;

        match tokio::time::timeout(timeout, output.recv()).await {
            Ok(Some(event)) => Ok(event),
            Ok(None) => Err(PipelineError::ChannelClosed),
            Err(_) => Err(PipelineError::Timeout(timeout)),
        }
    }

    /// Closes the input channel and waits for the worker to drain.
    pub async fn shutdown(self) -> Result<()> {
        let Self {
            input,
            output,
            worker,
            ..
        } = self;
        drop(input);
        drop(output);
        worker.await.map_err(|_| PipelineError::ChannelClosed)
    }
}
