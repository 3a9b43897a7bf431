//! The gesture pipeline: one owned value constructed at process start,
//! shared by the motion sample feed and the touch event feed.
//!
//! Both feeds mutate the same history window and gesture session, so every
//! ingestion call runs as a single critical section over that state. The
//! touch-up finalization hands the finished record to a background writer
//! task over a channel, keeping sink latency off the ingestion path.

use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, warn};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::classify::classify;
use crate::features::{extract, GestureEnd};
use crate::history::HistoryBuffer;
use crate::models::{GestureRecord, MotionSample, TouchEvent, TouchPhase};
use crate::recorder::GestureRecorder;
use crate::sink::GestureLog;

use super::writer::writer_loop;

struct PipelineState {
    history: HistoryBuffer,
    recorder: GestureRecorder,
}

pub struct GesturePipeline {
    state: Mutex<PipelineState>,
    record_tx: mpsc::UnboundedSender<GestureRecord>,
    summary_tx: watch::Sender<String>,
    writer: Mutex<Option<JoinHandle<()>>>,
    cancel_token: CancellationToken,
}

impl GesturePipeline {
    /// Spawns the background writer over `log`; must be called from within
    /// a tokio runtime.
    pub fn new(log: GestureLog) -> Self {
        let (record_tx, record_rx) = mpsc::unbounded_channel();
        let (summary_tx, _) = watch::channel(String::from("Waiting for gesture..."));
        let cancel_token = CancellationToken::new();

        let writer = tokio::spawn(writer_loop(log, record_rx, cancel_token.clone()));

        Self {
            state: Mutex::new(PipelineState {
                history: HistoryBuffer::new(),
                recorder: GestureRecorder::new(),
            }),
            record_tx,
            summary_tx,
            writer: Mutex::new(Some(writer)),
            cancel_token,
        }
    }

    /// Motion feed entry point. Non-finite samples are dropped; everything
    /// else lands in the history window and, while a gesture is active, in
    /// the during-accumulator. O(1) amortized, never touches the sink.
    pub fn on_motion_sample(&self, sample: MotionSample) {
        if !sample.is_finite() {
            debug!("dropping non-finite motion sample at {}", sample.timestamp_ns);
            return;
        }
        let mut state = self.state.lock().unwrap();
        state.history.push(sample);
        state.recorder.record(sample);
    }

    /// Touch feed entry point; dispatches on the event phase. Cancel is
    /// treated identically to up.
    pub fn on_touch_event(&self, event: TouchEvent) -> Option<GestureRecord> {
        match event.phase {
            TouchPhase::Down => {
                self.on_touch_down(event.x, event.y, event.wall_time_ms);
                None
            }
            TouchPhase::Up | TouchPhase::Cancel => self.on_touch_up(event.into()),
        }
    }

    pub fn on_touch_down(&self, x: f32, y: f32, wall_time_ms: i64) {
        let mut state = self.state.lock().unwrap();
        state.recorder.begin(x, y, wall_time_ms);
    }

    /// Finalizes the active gesture: snapshots the session and the history
    /// window atomically, derives features, classifies, queues the record
    /// for the writer and publishes the summary. Returns `None` when no
    /// gesture was in progress.
    pub fn on_touch_up(&self, end: GestureEnd) -> Option<GestureRecord> {
        let (finished, snapshot) = {
            let mut state = self.state.lock().unwrap();
            let finished = state.recorder.finish()?;
            (finished, state.history.snapshot())
        };

        let features = extract(&finished, &snapshot, end);
        let category = classify(
            features.distance,
            features.speed,
            features.angle_deg,
            features.duration_sec,
            features.pointer_count,
        );

        let record = GestureRecord {
            timestamp_ms: Utc::now().timestamp_millis(),
            start_x: finished.start_x,
            start_y: finished.start_y,
            features,
            category,
        };

        self.summary_tx.send_replace(record.summary());
        if self.record_tx.send(record.clone()).is_err() {
            warn!("gesture writer is gone; {} record not persisted", record.category);
        }

        Some(record)
    }

    /// Read-only projection of the latest classification for the
    /// presentation layer.
    pub fn summary_watch(&self) -> watch::Receiver<String> {
        self.summary_tx.subscribe()
    }

    /// Stops the writer after it drains any queued records.
    pub async fn shutdown(&self) -> Result<()> {
        self.cancel_token.cancel();
        let handle = self.writer.lock().unwrap().take();
        if let Some(handle) = handle {
            handle
                .await
                .context("gesture writer task failed to join")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GestureCategory;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("gesturelog-{tag}-{}-{nanos}", std::process::id()))
    }

    fn pipeline_in(dir: &PathBuf) -> GesturePipeline {
        let log = GestureLog::create(dir, 0).unwrap();
        GesturePipeline::new(log)
    }

    fn sample(x: f32, timestamp_ns: i64) -> MotionSample {
        MotionSample::new(x, 0.0, 9.81, timestamp_ns)
    }

    fn end_at(x: f32, y: f32, wall_time_ms: i64) -> GestureEnd {
        GestureEnd {
            x,
            y,
            touch_major: 6.0,
            touch_minor: 4.0,
            pointer_count: 1,
            wall_time_ms,
        }
    }

    #[tokio::test]
    async fn during_samples_cover_exactly_the_down_up_interval() {
        let dir = scratch_dir("interval");
        let pipeline = pipeline_in(&dir);

        pipeline.on_motion_sample(sample(1.0, 1_000_000)); // before down
        pipeline.on_touch_down(0.0, 0.0, 1_000);
        pipeline.on_motion_sample(sample(3.0, 2_000_000)); // between
        let record = pipeline.on_touch_up(end_at(4.0, 0.0, 1_100)).unwrap();
        pipeline.on_motion_sample(sample(5.0, 3_000_000)); // after up

        // during mean reflects only the sample between down and up
        assert!((record.features.during_x - 3.0).abs() < 1e-6);
        // history window at up held the before and between samples
        assert!((record.features.before_x - 2.0).abs() < 1e-6);

        pipeline.shutdown().await.unwrap();
        fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn touch_up_without_down_is_a_noop() {
        let dir = scratch_dir("noop");
        let pipeline = pipeline_in(&dir);

        assert!(pipeline.on_touch_up(end_at(10.0, 10.0, 100)).is_none());

        pipeline.shutdown().await.unwrap();
        fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn non_finite_samples_are_dropped() {
        let dir = scratch_dir("nonfinite");
        let pipeline = pipeline_in(&dir);

        pipeline.on_touch_down(0.0, 0.0, 1_000);
        pipeline.on_motion_sample(MotionSample::new(f32::NAN, 0.0, 9.81, 1_000_000));
        let record = pipeline.on_touch_up(end_at(1.0, 0.0, 1_050)).unwrap();

        // Accumulator stayed empty, so the during means defaulted to zero
        assert_eq!(record.features.during_x, 0.0);
        assert_eq!(record.features.during_z, 0.0);
        assert_eq!(record.features.before_z, 0.0);

        pipeline.shutdown().await.unwrap();
        fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn records_are_durable_after_shutdown() {
        let dir = scratch_dir("durable");
        let pipeline = pipeline_in(&dir);

        pipeline.on_touch_down(100.0, 100.0, 1_000);
        let record = pipeline.on_touch_up(end_at(102.0, 101.0, 1_100)).unwrap();
        assert_eq!(record.category, GestureCategory::Tap);

        pipeline.on_touch_down(0.0, 0.0, 2_000);
        pipeline.on_touch_up(end_at(200.0, 0.0, 2_200)).unwrap();

        pipeline.shutdown().await.unwrap();

        let contents = fs::read_to_string(dir.join("gesture_0.csv")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3); // header + two gestures
        assert!(lines[1].contains(",Tap,"));
        assert!(lines[2].contains(",Swipe Right,"));

        fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn cancel_event_finalizes_like_up() {
        let dir = scratch_dir("cancel");
        let pipeline = pipeline_in(&dir);

        pipeline.on_touch_event(TouchEvent::down(0.0, 0.0, 1_000));
        let mut cancel = TouchEvent::up(150.0, 0.0, 6.0, 4.0, 1, 1_200);
        cancel.phase = TouchPhase::Cancel;
        let record = pipeline.on_touch_event(cancel).unwrap();
        assert_eq!(record.category, GestureCategory::SwipeRight);

        pipeline.shutdown().await.unwrap();
        fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn summary_watch_tracks_latest_classification() {
        let dir = scratch_dir("summary");
        let pipeline = pipeline_in(&dir);
        let summaries = pipeline.summary_watch();

        assert!(summaries.borrow().starts_with("Waiting"));

        pipeline.on_touch_down(0.0, 0.0, 1_000);
        pipeline.on_touch_up(end_at(1.0, 1.0, 1_050)).unwrap();

        assert!(summaries.borrow().starts_with("Category: Tap"));

        pipeline.shutdown().await.unwrap();
        fs::remove_dir_all(&dir).ok();
    }
}
