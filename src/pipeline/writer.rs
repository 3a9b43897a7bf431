use log::{error, info};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::models::GestureRecord;
use crate::sink::GestureLog;

/// Background writer: consumes classified records and appends them to the
/// durable log. Append failures are reported and swallowed so the in-memory
/// pipeline keeps classifying.
pub(super) async fn writer_loop(
    mut log: GestureLog,
    mut records: mpsc::UnboundedReceiver<GestureRecord>,
    cancel_token: CancellationToken,
) {
    loop {
        tokio::select! {
            maybe_record = records.recv() => match maybe_record {
                Some(record) => append_record(&mut log, &record),
                None => break,
            },
            _ = cancel_token.cancelled() => {
                // Drain anything queued before the cancel landed
                while let Ok(record) = records.try_recv() {
                    append_record(&mut log, &record);
                }
                info!("gesture writer shutting down ({})", log.path().display());
                break;
            }
        }
    }
}

fn append_record(log: &mut GestureLog, record: &GestureRecord) {
    if let Err(err) = log.append(record) {
        error!("failed to append gesture record: {err:#}");
    }
}
