//! Discovery and mounting of every slider on a page.

use std::future;
use std::time::Instant;

use anyhow::Error;
use html::{Dom, NodeId};
use log::{debug, info};
use tokio::sync::mpsc;
use tokio::time::{Instant as TimerInstant, sleep_until};

use crate::config::{SLIDER_ATTR, SLIDER_KIND, SliderConfig};
use crate::host::SliderHost;
use crate::instance::{CmsSlider, RebuildMode};
use crate::rebuild::RebuildOutcome;

/// `[data-cltd-slider="cms"]` elements in document order.
pub fn discover(dom: &Dom) -> Vec<NodeId> {
    dom.descendants_matching(dom.root(), |dom, id| {
        dom.attribute(id, SLIDER_ATTR) == Some(SLIDER_KIND)
    })
}

/// All mounted sliders of one document.
#[derive(Debug)]
pub struct SliderPage {
    config: SliderConfig,
    sliders: Vec<CmsSlider>,
}

impl SliderPage {
    /// Capture every slider root and force-rebuild each one at `viewport_width`.
    ///
    /// Roots that cannot be captured are skipped.
    ///
    /// # Errors
    /// Returns the first rebuild failure.
    pub fn mount_all(
        dom: &mut Dom,
        viewport_width: u32,
        config: SliderConfig,
        host: &mut dyn SliderHost,
    ) -> Result<Self, Error> {
        let roots = discover(dom);
        let mut sliders = Vec::with_capacity(roots.len());
        for root in roots {
            let Some(mut slider) = CmsSlider::capture(dom, root, &config) else {
                continue;
            };
            let outcome = slider.rebuild(dom, viewport_width, RebuildMode::Forced, host)?;
            if let RebuildOutcome::Rebuilt { slides, group_size } = outcome {
                info!(
                    "mounted slider {root:?}: {} item(s), {slides} slide(s) of {group_size}",
                    slider.items().len()
                );
            }
            sliders.push(slider);
        }
        debug!("{} slider(s) mounted at {viewport_width}px", sliders.len());
        Ok(Self { config, sliders })
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn sliders(&self) -> &[CmsSlider] {
        &self.sliders
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    /// Rebuild every slider at `viewport_width`.
    ///
    /// # Errors
    /// Returns the first rebuild failure.
    pub fn rebuild_all(
        &mut self,
        dom: &mut Dom,
        viewport_width: u32,
        mode: RebuildMode,
        host: &mut dyn SliderHost,
    ) -> Result<Vec<RebuildOutcome>, Error> {
        self.sliders
            .iter_mut()
            .map(|slider| slider.rebuild(dom, viewport_width, mode, host))
            .collect()
    }

    /// Forward a resize to every slider's coordinator.
    pub fn on_resize(&mut self, viewport_width: u32, now: Instant) {
        for slider in &mut self.sliders {
            slider.on_resize(viewport_width, now);
        }
    }

    /// Run due debounced rebuilds; returns how many actually rebuilt.
    ///
    /// # Errors
    /// Returns the first rebuild failure.
    pub fn poll(&mut self, dom: &mut Dom, now: Instant, host: &mut dyn SliderHost) -> Result<usize, Error> {
        let mut rebuilt = 0;
        for slider in &mut self.sliders {
            if slider
                .poll_resize(dom, now, host)?
                .is_some_and(RebuildOutcome::is_rebuilt)
            {
                rebuilt += 1;
            }
        }
        Ok(rebuilt)
    }

    /// Earliest pending resize deadline across all sliders.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.sliders
            .iter()
            .filter_map(CmsSlider::next_resize_deadline)
            .min()
    }

    /// Feed viewport widths from `widths` through the debouncers until the
    /// channel closes, then flush whatever is still pending.
    ///
    /// Returns the number of slider rebuilds performed.
    ///
    /// # Errors
    /// Returns the first rebuild failure.
    pub async fn drive_resizes(
        &mut self,
        dom: &mut Dom,
        host: &mut dyn SliderHost,
        mut widths: mpsc::Receiver<u32>,
    ) -> Result<usize, Error> {
        let mut rebuilt = 0;
        loop {
            let deadline = self.next_deadline();
            tokio::select! {
                received = widths.recv() => {
                    let Some(width) = received else {
                        break;
                    };
                    self.on_resize(width, TimerInstant::now().into_std());
                }
                () = sleep_until_deadline(deadline) => {
                    rebuilt += self.poll(dom, TimerInstant::now().into_std(), host)?;
                }
            }
        }
        while let Some(deadline) = self.next_deadline() {
            sleep_until(TimerInstant::from_std(deadline)).await;
            rebuilt += self.poll(dom, deadline, host)?;
        }
        debug!("resize channel closed after {rebuilt} rebuild(s)");
        Ok(rebuilt)
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(TimerInstant::from_std(deadline)).await,
        None => future::pending::<()>().await,
    }
}
