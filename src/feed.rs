//! Simulated platform adapters.
//!
//! Stand-ins for the hardware accelerometer feed and the platform touch
//! dispatch: a ticker-driven sample generator (gravity on z plus noise) and
//! a small scripted set of touch interactions to exercise the pipeline.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::{interval, sleep, Duration};
use tokio_util::sync::CancellationToken;

use crate::models::{MotionSample, TouchEvent};
use crate::pipeline::GesturePipeline;

const GRAVITY_MPS2: f32 = 9.81;
const NOISE_AMPLITUDE: f32 = 0.05;

/// Delivers noisy accelerometer samples at `sample_rate_hz` until cancelled.
pub async fn run_motion_feed(
    pipeline: Arc<GesturePipeline>,
    sample_rate_hz: u32,
    cancel_token: CancellationToken,
) {
    let period = Duration::from_micros(1_000_000 / u64::from(sample_rate_hz.max(1)));
    let mut ticker = interval(period);
    let mut rng = StdRng::from_entropy();
    let clock = Instant::now();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let sample = MotionSample::new(
                    rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE),
                    rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE),
                    GRAVITY_MPS2 + rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE),
                    clock.elapsed().as_nanos() as i64,
                );
                pipeline.on_motion_sample(sample);
            }
            _ = cancel_token.cancelled() => {
                info!("motion feed shutting down");
                break;
            }
        }
    }
}

/// Drives a scripted tap, swipe and drag through the touch entry points.
pub async fn run_demo_script(pipeline: &GesturePipeline) {
    // Tap: tiny displacement, short hold
    perform_gesture(pipeline, (540.0, 960.0), (542.0, 961.0), 80).await;
    // Swipe right: long fast horizontal move
    perform_gesture(pipeline, (200.0, 800.0), (700.0, 820.0), 180).await;
    // Drag: long slow move
    perform_gesture(pipeline, (300.0, 400.0), (500.0, 900.0), 900).await;
}

async fn perform_gesture(
    pipeline: &GesturePipeline,
    start: (f32, f32),
    end: (f32, f32),
    hold_ms: u64,
) {
    pipeline.on_touch_event(TouchEvent::down(start.0, start.1, Utc::now().timestamp_millis()));
    sleep(Duration::from_millis(hold_ms)).await;
    let record = pipeline.on_touch_event(TouchEvent::up(
        end.0,
        end.1,
        7.0,
        5.0,
        1,
        Utc::now().timestamp_millis(),
    ));
    if let Some(record) = record {
        info!(
            "classified {} (distance {:.1}px in {:.3}s)",
            record.category, record.features.distance, record.features.duration_sec
        );
    }
}
