use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};

use crate::error::DispatchError;

/// Consumer end of the outbound channel.
///
/// Yields encoded notification payloads in publish order per producer; no
/// ordering holds across independent producers. Once every dispatcher
/// feeding the channel is dropped and the buffer is drained, receives fail
/// with `DispatchError::ChannelClosed`.
#[derive(Debug)]
pub struct OutboundStream {
    rx: Receiver<String>,
}

impl OutboundStream {
    pub(crate) fn new(rx: Receiver<String>) -> Self {
        Self { rx }
    }

    /// Receive the next payload (blocking).
    pub fn recv(&self) -> Result<String, DispatchError> {
        self.rx.recv().map_err(|_| DispatchError::ChannelClosed)
    }

    /// Receive the next payload with a timeout.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<String, DispatchError> {
        self.rx.recv_timeout(timeout).map_err(|err| match err {
            RecvTimeoutError::Timeout => DispatchError::Timeout {
                duration_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            },
            RecvTimeoutError::Disconnected => DispatchError::ChannelClosed,
        })
    }

    /// Receive a payload if one is buffered.
    #[must_use]
    pub fn try_recv(&self) -> Option<String> {
        self.rx.try_recv().ok()
    }

    /// Takes every payload currently buffered.
    #[must_use]
    pub fn drain(&self) -> Vec<String> {
        self.rx.try_iter().collect()
    }

    /// Number of buffered payloads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
