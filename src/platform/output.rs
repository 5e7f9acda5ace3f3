//! Headless renderer that reports the HUD through the log

use super::Renderer;
use crate::renderer::Frame;

/// Logs the status line every `interval` frames and whenever the banner changes
#[derive(Debug, Clone)]
pub struct LogRenderer {
    interval: u64,
    frames: u64,
    last_banner: Option<String>,
}

impl LogRenderer {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
            last_banner: None,
        }
    }
}

impl Renderer for LogRenderer {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;

        if self.frames % self.interval == 0 {
            log::info!("[tick {}] {}", frame.tick, frame.status.text);
        }

        let banner = frame.banner.as_ref().map(|b| b.text.clone());
        if banner != self.last_banner {
            if let Some(text) = &banner {
                log::info!("[tick {}] {}", frame.tick, text);
            }
            self.last_banner = banner;
        }
    }
}
