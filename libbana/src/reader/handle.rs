// libbana/src/reader/handle.rs

//! [`Reader`], the protocol engine.

use std::time::Instant;

use crate::activity::Activity;
use crate::card::CardReader;
use crate::config::ReaderConfig;
use crate::protocol::FrameSync;
use crate::reader::dispatch::Dispatcher;
use crate::transport::ByteSink;

/// Protocol engine for one emulated reader.
///
/// The transport feeds received bytes one at a time; complete requests
/// are answered through the byte sink on the same call. Calls must be
/// serialized by the owner.
pub struct Reader<C, S> {
    card: C,
    sink: S,
    sync: FrameSync,
    activity: Activity,
    config: ReaderConfig,
}

impl<C: CardReader, S: ByteSink> Reader<C, S> {
    /// Create a reader with the default configuration.
    pub fn new(card: C, sink: S) -> Self {
        Self::with_config(card, sink, ReaderConfig::default())
    }

    /// Create a reader with an explicit configuration.
    pub fn with_config(card: C, sink: S, config: ReaderConfig) -> Self {
        Self {
            card,
            sink,
            sync: FrameSync::new(config.inter_byte_timeout),
            activity: Activity::new(config.activity_window),
            config,
        }
    }

    /// Feed one received byte. Always accepted.
    pub fn feed(&mut self, byte: u8) -> bool {
        self.feed_at(byte, Instant::now())
    }

    /// Feed one byte received at `now`.
    pub fn feed_at(&mut self, byte: u8, now: Instant) -> bool {
        if let Some(frame) = self.sync.push(byte, now) {
            Dispatcher {
                card: &mut self.card,
                sink: &mut self.sink,
                debug: self.config.debug,
            }
            .handle(frame);
            self.activity.touch(now);
        }
        true
    }

    /// Feed a run of bytes received together at `now`.
    pub fn feed_slice_at(&mut self, bytes: &[u8], now: Instant) {
        for &b in bytes {
            self.feed_at(b, now);
        }
    }

    /// True while the host has talked to this reader recently.
    pub fn is_active(&self) -> bool {
        self.is_active_at(Instant::now())
    }

    /// [`Reader::is_active`] against an explicit instant.
    pub fn is_active_at(&self, now: Instant) -> bool {
        self.activity.is_active(now)
    }

    /// Instant the current activity window ends, if any frame was handled.
    pub fn expires_at(&self) -> Option<Instant> {
        self.activity.expires_at()
    }

    /// Indicator color for display logic (always 0 for now).
    pub fn led_color(&self) -> u32 {
        self.activity.led_color()
    }

    /// Bytes accumulated for the in-flight request.
    pub fn pending(&self) -> usize {
        self.sync.pending()
    }

    /// Active configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// The card reader.
    pub fn card(&self) -> &C {
        &self.card
    }

    /// The card reader, mutably.
    pub fn card_mut(&mut self) -> &mut C {
        &mut self.card
    }

    /// The byte sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The byte sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Tear down, returning the card reader and the sink.
    pub fn into_parts(self) -> (C, S) {
        (self.card, self.sink)
    }
}
