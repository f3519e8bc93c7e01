// libbana/src/reader/builder.rs

//! [`ReaderBuilder`].

use std::time::Duration;

use crate::card::CardReader;
use crate::config::ReaderConfig;
use crate::reader::handle::Reader;
use crate::transport::{ByteSink, NullSink};

/// Helper to construct a Reader with optional configuration.
#[derive(Debug, Clone, Default)]
pub struct ReaderBuilder {
    config: ReaderConfig,
}

impl ReaderBuilder {
    /// Builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Gap after which a partial frame is abandoned.
    pub fn inter_byte_timeout(mut self, timeout: Duration) -> Self {
        self.config.inter_byte_timeout = timeout;
        self
    }

    /// How long the reader stays active after a handled frame.
    pub fn activity_window(mut self, window: Duration) -> Self {
        self.config.activity_window = window;
        self
    }

    /// Log polled cards and responses at `debug` level.
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Consume the builder and return a Reader writing to `sink`.
    pub fn build<C: CardReader, S: ByteSink>(self, card: C, sink: S) -> Reader<C, S> {
        Reader::with_config(card, sink, self.config)
    }

    /// Reader whose output is discarded until replaced.
    pub fn build_detached<C: CardReader>(self, card: C) -> Reader<C, NullSink> {
        self.build(card, NullSink)
    }
}
