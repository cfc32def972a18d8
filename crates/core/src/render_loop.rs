//! Per-tick pipeline: sample, map, assemble, paint
//!
//! The loop itself does not sleep. Whoever owns the clock (the GTK main
//! loop in the binary, a plain test in the tests) calls [`RenderLoop::tick`]
//! once per [`crate::TICK_INTERVAL`].

use crate::assembler::assemble;
use crate::data_source::MetricSampler;
use crate::mapper::Mapper;
use anyhow::Result;
use doomguy_status_types::Frame;
use log::{error, trace};
use rand::Rng;
use std::time::Instant;

/// Receives each finished frame
pub trait PaintSink {
    fn paint(&mut self, frame: &Frame) -> Result<()>;
}

/// Phase of the render loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Sampling,
    Mapping,
    Assembling,
    Painting,
    Sleeping,
}

impl LoopState {
    /// The only state allowed to follow this one
    pub fn next(self) -> LoopState {
        match self {
            LoopState::Idle => LoopState::Sampling,
            LoopState::Sampling => LoopState::Mapping,
            LoopState::Mapping => LoopState::Assembling,
            LoopState::Assembling => LoopState::Painting,
            LoopState::Painting => LoopState::Sleeping,
            LoopState::Sleeping => LoopState::Sampling,
        }
    }
}

/// Drives one full sample-to-paint cycle per tick
pub struct RenderLoop<S, P, R> {
    sampler: S,
    sink: P,
    rng: R,
    mapper: Mapper,
    state: LoopState,
    ticks: u64,
}

impl<S, P, R> RenderLoop<S, P, R>
where
    S: MetricSampler,
    P: PaintSink,
    R: Rng,
{
    pub fn new(sampler: S, sink: P, rng: R, mapper: Mapper) -> Self {
        Self {
            sampler,
            sink,
            rng,
            mapper,
            state: LoopState::Idle,
            ticks: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Completed ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }

    /// Run one tick and return the frame that was painted
    ///
    /// Never fails: source errors were already absorbed by the sampler and
    /// a paint error is logged, leaving the next tick to try again.
    pub fn tick(&mut self) -> Frame {
        let start = Instant::now();

        self.advance(LoopState::Sampling);
        let snapshot = self.sampler.sample();

        self.advance(LoopState::Mapping);
        let tokens = self.mapper.map(&snapshot, &mut self.rng);

        self.advance(LoopState::Assembling);
        let frame = assemble(&tokens);

        self.advance(LoopState::Painting);
        if let Err(e) = self.sink.paint(&frame) {
            error!("Failed to paint frame {}: {:#}", self.ticks, e);
        }

        self.advance(LoopState::Sleeping);
        self.ticks += 1;

        trace!(
            "Tick {} took {:?} ({} placements)",
            self.ticks,
            start.elapsed(),
            frame.len()
        );
        if log::log_enabled!(log::Level::Trace) {
            trace!("Frame: {}", serde_json::to_string(&frame).unwrap_or_default());
        }

        frame
    }

    fn advance(&mut self, to: LoopState) {
        debug_assert_eq!(self.state.next(), to, "render loop skipped a phase");
        self.state = to;
    }
}
