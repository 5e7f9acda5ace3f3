//! Frame pacing
//!
//! Sleeps out whatever is left of the frame budget, like an arcade clock.
//! There is no accumulator: a slow tick simply makes the game run slower.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    frame: Duration,
    last: Option<Instant>,
}

impl FramePacer {
    /// Pace to one tick per `frame`
    pub fn new(frame: Duration) -> Self {
        Self { frame, last: None }
    }

    /// A pacer that never sleeps (tests, headless batch runs)
    pub fn unpaced() -> Self {
        Self {
            frame: Duration::ZERO,
            last: None,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block until one frame has passed since the previous call.
    ///
    /// Returns how long the previous frame actually took.
    pub fn wait(&mut self) -> Duration {
        let elapsed = match self.last {
            Some(last) => {
                let busy = last.elapsed();
                if busy < self.frame {
                    std::thread::sleep(self.frame - busy);
                }
                last.elapsed()
            }
            None => Duration::ZERO,
        };
        self.last = Some(Instant::now());
        elapsed
    }
}
