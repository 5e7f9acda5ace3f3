//! Fixed-rate game loop
//!
//! Each iteration: wait out the frame, sample input, run exactly one tick,
//! hand the exported frame to the renderer. Quitting is only noticed between
//! ticks, so a quit sampled this frame still completes this tick.

use crate::platform::{FramePacer, InputSource, Renderer};
use crate::renderer::{Frame, build_frame};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, TickInput, tick};

/// Why `GameLoop::run` returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The input source asked to quit
    Quit,
    /// The game was won or lost and `halt_on_outcome` is set
    Outcome,
    /// `max_ticks` reached
    TickLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub phase: GamePhase,
    pub reason: StopReason,
}

pub struct GameLoop {
    pub state: GameState,
    settings: Settings,
    pacer: FramePacer,
}

impl GameLoop {
    /// Loop paced to `settings.tick_rate`
    pub fn new(settings: Settings) -> Self {
        let pacer = FramePacer::new(settings.tick_duration());
        Self::with_pacer(settings, pacer)
    }

    /// Loop that runs ticks back to back
    pub fn unpaced(settings: Settings) -> Self {
        Self::with_pacer(settings, FramePacer::unpaced())
    }

    pub fn with_pacer(settings: Settings, pacer: FramePacer) -> Self {
        Self {
            state: GameState::from_settings(&settings),
            settings,
            pacer,
        }
    }

    /// Run one tick and export the resulting frame
    pub fn step(&mut self, input: &TickInput) -> Frame {
        tick(&mut self.state, input);
        build_frame(&self.state)
    }

    /// Drive the simulation until quit (or an optional stop condition)
    pub fn run<I, R>(&mut self, input: &mut I, renderer: &mut R) -> RunSummary
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let start_tick = self.state.time_ticks;
        log::info!(
            "Running at {} ticks/s ({:?} per frame, seed {})",
            self.settings.tick_rate,
            self.pacer.frame_duration(),
            self.state.seed
        );

        let reason = loop {
            self.pacer.wait();

            let sampled = input.poll(&self.state);
            let frame = self.step(&sampled);
            renderer.present(&frame);

            if sampled.quit {
                break StopReason::Quit;
            }
            if self.settings.halt_on_outcome && self.state.phase.is_terminal() {
                break StopReason::Outcome;
            }
            if let Some(limit) = self.settings.max_ticks {
                if self.state.time_ticks - start_tick >= limit {
                    break StopReason::TickLimit;
                }
            }
        };

        let summary = RunSummary {
            ticks: self.state.time_ticks - start_tick,
            phase: self.state.phase,
            reason,
        };
        log::info!(
            "Stopped after {} ticks ({:?}), phase {:?}",
            summary.ticks,
            summary.reason,
            summary.phase
        );
        summary
    }
}
