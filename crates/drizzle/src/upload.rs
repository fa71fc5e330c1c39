//! # Upload Hand-off
//!
//! Moves each frame's packed instance streams to a consumer thread that
//! stands in for the renderer's buffer upload.
//!
//! ```text
//! ┌─────────────┐  UploadFrame   ┌─────────────┐
//! │ Frame loop  │───────────────>│  Consumer   │
//! │  (Scene)    │<───────────────│  (upload)   │
//! └─────────────┘   recycled     └─────────────┘
//! ```
//!
//! Both channels are bounded. Frames are recycled so their byte buffers
//! stop growing once every emitter has peaked. If the consumer falls behind,
//! new frames are dropped rather than stalling the loop.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use drizzle_particles::{Emitter, InstancedDraw};

use crate::scene::Scene;

/// One emitter's streams, copied out of its published feed.
#[derive(Clone, Debug, Default)]
pub struct InstanceBatch {
    /// Emitter name.
    pub emitter: String,
    /// Draw descriptor matching the streams.
    pub draw: InstancedDraw,
    /// `[f32; 4]` position/size per instance, as bytes.
    pub position_size: Vec<u8>,
    /// `[u8; 4]` color per instance.
    pub colors: Vec<u8>,
}

impl InstanceBatch {
    /// Overwrites this batch with an emitter's published feed.
    pub fn fill_from(&mut self, emitter: &Emitter) {
        let feed = emitter.feed();

        self.emitter.clear();
        self.emitter.push_str(emitter.name());
        self.draw = emitter.draw();
        self.position_size.clear();
        self.position_size.extend_from_slice(feed.position_size_bytes());
        self.colors.clear();
        self.colors.extend_from_slice(feed.color_bytes());
    }

    /// Bytes to upload for this batch.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.position_size.len() + self.colors.len()
    }
}

/// Every emitter's batch for one frame.
#[derive(Clone, Debug, Default)]
pub struct UploadFrame {
    /// Scene frame number.
    pub frame: u64,
    /// One batch per emitter, in scene order.
    pub batches: Vec<InstanceBatch>,
}

impl UploadFrame {
    /// Overwrites this frame with the scene's published feeds.
    pub fn fill_from(&mut self, scene: &Scene) {
        self.frame = scene.frame();
        self.batches
            .resize_with(scene.emitters().len(), InstanceBatch::default);
        for (batch, emitter) in self.batches.iter_mut().zip(scene.emitters()) {
            batch.fill_from(emitter);
        }
    }
}

/// Running totals kept by the consumer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UploadTotals {
    /// Frames received.
    pub frames: u64,
    /// Instances across all frames and emitters.
    pub instances: u64,
    /// Bytes across all frames and emitters.
    pub bytes: u64,
    /// Last frame number received.
    pub last_frame: u64,
}

impl UploadTotals {
    fn record(&mut self, frame: &UploadFrame) {
        self.frames += 1;
        self.last_frame = frame.frame;
        for batch in &frame.batches {
            self.instances += u64::from(batch.draw.instance_count);
            self.bytes += batch.byte_len() as u64;
        }
    }
}

/// Producer side of the hand-off, owning the consumer thread.
#[derive(Debug)]
pub struct UploadQueue {
    sender: Sender<UploadFrame>,
    recycled: Receiver<UploadFrame>,
    worker: JoinHandle<UploadTotals>,
    dropped: u64,
}

impl UploadQueue {
    /// Starts the consumer thread.
    ///
    /// # Arguments
    ///
    /// * `depth` - Frames in flight before new frames are dropped.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the thread cannot be spawned.
    pub fn spawn(depth: usize) -> std::io::Result<Self> {
        let (sender, receiver) = bounded::<UploadFrame>(depth);
        let (recycle, recycled) = bounded::<UploadFrame>(depth + 1);

        let worker = thread::Builder::new()
            .name("drizzle-upload".to_owned())
            .spawn(move || consume(&receiver, &recycle))?;

        Ok(Self {
            sender,
            recycled,
            worker,
            dropped: 0,
        })
    }

    /// Copies the scene's published feeds and hands them to the consumer.
    ///
    /// Returns `false` if the frame was dropped because the consumer is
    /// behind or gone.
    pub fn submit(&mut self, scene: &Scene) -> bool {
        let mut frame = self.recycled.try_recv().unwrap_or_default();
        frame.fill_from(scene);

        match self.sender.try_send(frame) {
            Ok(()) => true,
            Err(TrySendError::Full(_) | TrySendError::Disconnected(_)) => {
                self.dropped += 1;
                tracing::debug!("Upload frame {} dropped", scene.frame());
                false
            }
        }
    }

    /// Frames dropped so far.
    #[inline]
    #[must_use]
    pub const fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Closes the queue and waits for the consumer to drain it.
    ///
    /// Returns `None` if the consumer thread panicked.
    #[must_use]
    pub fn finish(self) -> Option<UploadTotals> {
        let Self {
            sender,
            recycled,
            worker,
            ..
        } = self;
        drop(sender);
        drop(recycled);
        worker.join().ok()
    }
}

fn consume(frames: &Receiver<UploadFrame>, recycle: &Sender<UploadFrame>) -> UploadTotals {
    let mut totals = UploadTotals::default();

    for frame in frames {
        totals.record(&frame);
        tracing::trace!(
            "Uploaded frame {} ({} batches)",
            frame.frame,
            frame.batches.len()
        );
        // Producer may have stopped taking frames back; that's fine
        let _ = recycle.try_send(frame);
    }

    totals
}
