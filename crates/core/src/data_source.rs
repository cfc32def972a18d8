//! Metric source trait and the sampler that drives a set of them

use crate::error::StatusError;
use anyhow::Result;
use doomguy_status_types::{Metric, Reading, Snapshot};
use log::{debug, trace};

/// Metadata about a metric source
#[derive(Debug, Clone)]
pub struct SourceMetadata {
    /// Unique identifier for this source type
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Metrics this source fills in
    pub provides: Vec<Metric>,
}

impl SourceMetadata {
    pub fn new(id: impl Into<String>, name: impl Into<String>, provides: &[Metric]) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            provides: provides.to_vec(),
        }
    }
}

/// Trait for all metric sources
///
/// A source queries one part of the host and returns readings for the
/// metrics it provides. Errors are fine: the sampler turns them into
/// `Reading::Unavailable` for every metric the source provides.
pub trait MetricSource {
    /// Get metadata about this source
    fn metadata(&self) -> &SourceMetadata;

    /// Query the host for fresh readings
    fn sample(&mut self) -> Result<Vec<(Metric, Reading)>>;

    /// Check if this source is backed by a real host facility
    fn is_available(&self) -> bool {
        true
    }
}

/// Type-erased metric source for dynamic dispatch
pub type BoxedMetricSource = Box<dyn MetricSource>;

/// Stand-in for a source whose host facility is missing
///
/// Always reports its metrics as unavailable, which every mapping rule
/// already knows how to draw.
pub struct NullSource {
    metadata: SourceMetadata,
}

impl NullSource {
    pub fn new(id: impl Into<String>, provides: &[Metric]) -> Self {
        let id = id.into();
        Self {
            metadata: SourceMetadata::new(id.clone(), format!("{} (unsupported)", id), provides),
        }
    }
}

impl MetricSource for NullSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn sample(&mut self) -> Result<Vec<(Metric, Reading)>> {
        Ok(self
            .metadata
            .provides
            .iter()
            .map(|&metric| (metric, Reading::Unavailable))
            .collect())
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Produces one complete snapshot per tick
pub trait MetricSampler {
    fn sample(&mut self) -> Snapshot;
}

/// Samples every registered source in turn
///
/// The snapshot starts out all-unavailable and each source fills in what
/// it can, so a failing source never blocks the others.
#[derive(Default)]
pub struct SourceSampler {
    sources: Vec<BoxedMetricSource>,
}

impl SourceSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source; later sources overwrite earlier ones for shared metrics
    pub fn register(&mut self, source: BoxedMetricSource) {
        debug!(
            "Registered metric source '{}' (available: {})",
            source.metadata().id,
            source.is_available()
        );
        self.sources.push(source);
    }

    pub fn with_source(mut self, source: BoxedMetricSource) -> Self {
        self.register(source);
        self
    }

    pub fn source_ids(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.metadata().id.as_str()).collect()
    }
}

impl MetricSampler for SourceSampler {
    fn sample(&mut self) -> Snapshot {
        let mut snapshot = Snapshot::default();

        for source in &mut self.sources {
            match source.sample() {
                Ok(readings) => {
                    for (metric, reading) in readings {
                        snapshot.set(metric, reading);
                    }
                }
                Err(e) => {
                    let err = StatusError::sensor(&source.metadata().id, e);
                    debug!("{}", err);
                    for &metric in &source.metadata().provides {
                        snapshot.set(metric, Reading::Unavailable);
                    }
                }
            }
        }

        trace!("Sampled snapshot: {:?}", snapshot);
        snapshot
    }
}
