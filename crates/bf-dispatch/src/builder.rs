//! Fluent builder for constructing a [`DispatchEngine`].

use bf_core::{AreaDistances, DispatchConfig, SimRng};
use bf_queue::DispatchQueues;

use crate::{BinRegistry, DispatchEngine, DispatchObserver, DispatchResult, NoopObserver};

/// Fluent builder for [`DispatchEngine<O>`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                     |
/// |------------------|-----------------------------|
/// | `.observer(o)`   | [`NoopObserver`]            |
/// | `.areas(a)`      | Empty `AreaDistances`       |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(DispatchConfig { seed: 7, ..Default::default() })
///     .observer(MyAlerts::default())
///     .build()?;
/// engine.reinitialize()?;
/// ```
pub struct EngineBuilder<O: DispatchObserver = NoopObserver> {
    config:   DispatchConfig,
    areas:    Option<AreaDistances>,
    observer: O,
}

impl EngineBuilder<NoopObserver> {
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            config,
            areas:    None,
            observer: NoopObserver,
        }
    }
}

impl<O: DispatchObserver> EngineBuilder<O> {
    /// Replace the observer that receives urgent transitions and dispatches.
    pub fn observer<P: DispatchObserver>(self, observer: P) -> EngineBuilder<P> {
        EngineBuilder {
            config: self.config,
            areas:  self.areas,
            observer,
        }
    }

    /// Pre-load canonical area distances.  Seeding draws a fresh distance
    /// only for areas missing from this table.
    pub fn areas(mut self, areas: AreaDistances) -> Self {
        self.areas = Some(areas);
        self
    }

    /// Validate the configuration and return an empty engine.
    pub fn build(self) -> DispatchResult<DispatchEngine<O>> {
        self.config.validate()?;

        Ok(DispatchEngine {
            rng:          SimRng::new(self.config.seed),
            config:       self.config,
            registry:     BinRegistry::new(),
            queues:       DispatchQueues::new(),
            areas:        self.areas.unwrap_or_default(),
            last_summary: None,
            observer:     self.observer,
        })
    }
}
