//! `SimObserver` adapters: tabular output and frame dumps.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use sm_core::Tick;
use sm_sim::{RenderSnapshot, SimObserver, TickStats};
use tracing::debug;

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{Frame, FrameStyle, OutputError, OutputResult};

/// Keep only the first error.
fn store_err(slot: &mut Option<OutputError>, result: OutputResult<()>) {
    if let Err(e) = result {
        if slot.is_none() {
            *slot = Some(e);
        }
    }
}

// ── SimOutputObserver ─────────────────────────────────────────────────────────

/// A [`SimObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, stats: &TickStats) {
        let row = TickSummaryRow {
            tick:          stats.tick.0,
            elapsed:       stats.elapsed,
            total_density: stats.total_density,
            max_density:   stats.max_density,
        };
        let result = self.writer.write_tick_summary(&row);
        store_err(&mut self.last_error, result);
    }

    fn on_snapshot(&mut self, snapshot: &RenderSnapshot<'_>) {
        let tick = snapshot.tick.0;
        let rows: Vec<AgentSnapshotRow> = snapshot
            .agents
            .iter()
            .map(|(id, agent)| AgentSnapshotRow {
                agent_id: id.0,
                tick,
                x:        agent.position.x,
                y:        agent.position.y,
                heading:  agent.heading,
                r:        agent.color.r,
                g:        agent.color.g,
                b:        agent.color.b,
                a:        agent.color.a,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            store_err(&mut self.last_error, result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        store_err(&mut self.last_error, result);
    }
}

// ── FrameObserver ─────────────────────────────────────────────────────────────

/// A [`SimObserver`] that composites every snapshot and writes it as
/// `frame_NNNNNN.ppm` into a directory.
///
/// The frame buffer is allocated on the first snapshot and reused.
pub struct FrameObserver {
    dir:        PathBuf,
    style:      FrameStyle,
    frame:      Option<Frame>,
    written:    usize,
    last_error: Option<OutputError>,
}

impl FrameObserver {
    /// `dir` must exist.
    pub fn new(dir: impl Into<PathBuf>, style: FrameStyle) -> Self {
        Self { dir: dir.into(), style, frame: None, written: 0, last_error: None }
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> usize {
        self.written
    }

    /// Path a frame for `tick` is written to.
    pub fn frame_path(dir: &Path, tick: Tick) -> PathBuf {
        dir.join(format!("frame_{:06}.ppm", tick.0))
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn write_frame(&mut self, snapshot: &RenderSnapshot<'_>) -> OutputResult<()> {
        let frame = match &mut self.frame {
            Some(frame) if frame.dims() == snapshot.field.dims() => {
                frame.composite_into(snapshot, &self.style);
                frame
            }
            slot => slot.insert(Frame::composite(snapshot, &self.style)?),
        };

        let path = Self::frame_path(&self.dir, snapshot.tick);
        frame.write_ppm(BufWriter::new(File::create(&path)?))?;
        debug!(path = %path.display(), "frame written");
        self.written += 1;
        Ok(())
    }
}

impl SimObserver for FrameObserver {
    fn on_snapshot(&mut self, snapshot: &RenderSnapshot<'_>) {
        let result = self.write_frame(snapshot);
        store_err(&mut self.last_error, result);
    }
}
