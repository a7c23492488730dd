//! `FleetOutputObserver<W>` — bridges `FleetObserver` to an `OutputWriter`.

use lift_car::{CarView, DoorState};
use lift_core::{FleetConfig, Tick};
use lift_sim::FleetObserver;

use crate::row::{direction_label, CarSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`FleetObserver`] that writes car snapshots and tick summaries to an
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `FleetObserver`
/// methods have no return value.  After the run, flush with
/// [`finish`][Self::finish] and check for errors with
/// [`take_error`][Self::take_error].
pub struct FleetOutputObserver<W: OutputWriter> {
    writer:             W,
    tick_duration_secs: u32,
    last_error:         Option<OutputError>,
}

impl<W: OutputWriter> FleetOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for elapsed-time
    /// conversion.
    pub fn new(writer: W, config: &FleetConfig) -> Self {
        Self {
            writer,
            tick_duration_secs: config.tick_duration_secs,
            last_error: None,
        }
    }

    /// Flush and close the underlying writer.
    ///
    /// Call this once the run is over; there is no end-of-run callback, so
    /// the writer cannot finish itself.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn elapsed_secs(&self, tick: Tick) -> u64 {
        tick.0 * self.tick_duration_secs as u64
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FleetObserver for FleetOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, moved: usize) {
        let row = TickSummaryRow {
            tick:         tick.0,
            elapsed_secs: self.elapsed_secs(tick),
            moved_cars:   moved as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, cars: &[CarView]) {
        let rows: Vec<CarSnapshotRow> = cars
            .iter()
            .map(|view| CarSnapshotRow {
                car_id:        view.id.0,
                tick:          tick.0,
                floor:         view.floor.0,
                direction:     direction_label(view.direction),
                door_open:     view.door == DoorState::Open,
                pending_stops: view.destinations.len() as u32,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }
}
