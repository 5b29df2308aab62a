use std::sync::Arc;
use tokio::sync::watch;

use super::{Frame, WinnerDisplay};
use crate::core::Rgb;

/// Display backed by a watch channel holding the latest frame
///
/// Browser sources read the current frame over HTTP and follow updates
/// over a WebSocket.
#[derive(Debug, Clone)]
pub struct DisplaySurface {
    tx: Arc<watch::Sender<Frame>>,
}

impl DisplaySurface {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Frame::blank());
        Self { tx: Arc::new(tx) }
    }

    /// Frame currently drawn
    pub fn frame(&self) -> Frame {
        self.tx.borrow().clone()
    }

    /// Receiver notified on every flip
    pub fn subscribe(&self) -> watch::Receiver<Frame> {
        self.tx.subscribe()
    }

    fn flip(&self, frame: Frame) {
        self.tx.send_replace(frame);
    }
}

impl Default for DisplaySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl WinnerDisplay for DisplaySurface {
    fn render_winner(&self, color: Rgb, name: &str) {
        tracing::info!("Display: {} on {}", name, color.to_hex());
        self.flip(Frame::winner(color, name));
    }

    fn render_startup_banner(&self) {
        self.flip(Frame::startup_banner());
    }
}
