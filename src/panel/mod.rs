//! Panel control
//!
//! The engine never draws anything itself: a host-side adapter implements
//! `PanelSurface` and the controller decides when to open or close it. A
//! toggle already in flight short-circuits new toggle requests instead of
//! stacking panel operations.

pub mod data;
pub mod state;

pub use data::{panel_data, ConfigRow, PanelData, SkillRow};
pub use state::PanelState;

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

use crate::core::error::Result;

/// Host-side rendering adapter for the panel
#[async_trait]
pub trait PanelSurface: Send + Sync {
    async fn open(&self, data: PanelData) -> Result<()>;
    async fn close(&self) -> Result<()>;
}

/// What a toggle request ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Opened,
    Closed,
    /// Another toggle was still running; this request was dropped
    InFlight,
}

/// Open/close coordination for the panel
#[derive(Default)]
pub struct PanelController {
    open: AtomicBool,
    toggling: AtomicBool,
}

impl PanelController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Open the panel if closed, close it if open
    ///
    /// Re-entrant calls while an open/close is still settling return
    /// `InFlight` without touching the surface. A failed close still marks
    /// the panel closed so the next toggle starts fresh.
    pub async fn toggle(
        &self,
        surface: &dyn PanelSurface,
        data: PanelData,
    ) -> Result<ToggleOutcome> {
        if self.toggling.swap(true, Ordering::SeqCst) {
            debug!("panel toggle already in flight, ignoring");
            return Ok(ToggleOutcome::InFlight);
        }

        let result = self.toggle_inner(surface, data).await;
        self.toggling.store(false, Ordering::SeqCst);
        result
    }

    async fn toggle_inner(
        &self,
        surface: &dyn PanelSurface,
        data: PanelData,
    ) -> Result<ToggleOutcome> {
        if self.open.load(Ordering::SeqCst) {
            // Treat the panel as closed even when teardown fails
            self.open.store(false, Ordering::SeqCst);
            surface.close().await?;
            Ok(ToggleOutcome::Closed)
        } else {
            surface.open(data).await?;
            self.open.store(true, Ordering::SeqCst);
            Ok(ToggleOutcome::Opened)
        }
    }

    /// Close the panel if open, e.g. during shutdown
    pub async fn close(&self, surface: &dyn PanelSurface) -> Result<()> {
        if self.open.swap(false, Ordering::SeqCst) {
            surface.close().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RequestError;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use std::time::Duration;

    /// Surface that counts operations and can be made slow or broken
    #[derive(Default)]
    struct TestSurface {
        opens: AtomicUsize,
        closes: AtomicUsize,
        delay_ms: u64,
        fail_open: bool,
    }

    #[async_trait]
    impl PanelSurface for TestSurface {
        async fn open(&self, _data: PanelData) -> Result<()> {
            if self.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            }
            if self.fail_open {
                return Err(RequestError::InvalidInput("render failed".into()));
            }
            self.opens.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn close(&self) -> Result<()> {
            self.closes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_toggle_opens_then_closes() {
        let controller = PanelController::new();
        let surface = TestSurface::default();

        let outcome = controller.toggle(&surface, PanelData::default()).await.unwrap();
        assert_eq!(outcome, ToggleOutcome::Opened);
        assert!(controller.is_open());

        let outcome = controller.toggle(&surface, PanelData::default()).await.unwrap();
        assert_eq!(outcome, ToggleOutcome::Closed);
        assert!(!controller.is_open());
        assert_eq!(surface.opens.load(Ordering::SeqCst), 1);
        assert_eq!(surface.closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_overlapping_toggles_collapse() {
        let controller = Arc::new(PanelController::new());
        let surface = Arc::new(TestSurface {
            delay_ms: 50,
            ..TestSurface::default()
        });

        let mut handles = Vec::new();
        for _ in 0..5 {
            let controller = controller.clone();
            let surface = surface.clone();
            handles.push(tokio::spawn(async move {
                controller.toggle(surface.as_ref(), PanelData::default()).await
            }));
        }

        let mut opened = 0;
        let mut in_flight = 0;
        for handle in handles {
            match handle.await.unwrap().unwrap() {
                ToggleOutcome::Opened => opened += 1,
                ToggleOutcome::InFlight => in_flight += 1,
                ToggleOutcome::Closed => panic!("nothing should close here"),
            }
        }

        assert_eq!(opened, 1);
        assert_eq!(in_flight, 4);
        assert_eq!(surface.opens.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_open_leaves_panel_closed() {
        let controller = PanelController::new();
        let surface = TestSurface {
            fail_open: true,
            ..TestSurface::default()
        };

        assert!(controller.toggle(&surface, PanelData::default()).await.is_err());
        assert!(!controller.is_open());

        // The guard was released; the next toggle runs again
        let surface = TestSurface::default();
        let outcome = controller.toggle(&surface, PanelData::default()).await.unwrap();
        assert_eq!(outcome, ToggleOutcome::Opened);
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let controller = PanelController::new();
        let surface = TestSurface::default();

        controller.toggle(&surface, PanelData::default()).await.unwrap();
        controller.close(&surface).await.unwrap();
        controller.close(&surface).await.unwrap();
        assert_eq!(surface.closes.load(Ordering::SeqCst), 1);
    }
}
