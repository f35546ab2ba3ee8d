use std::io::{self, Read, Write};

use log::trace;
use thiserror::Error;

/// Upper bound on a single message, checked before the payload allocation.
pub const MAX_MESSAGE_SIZE: u64 = 64 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Transport IO Error: {0}")]
    Io(#[from] io::Error),

    #[error("message of {size} bytes exceeds the {max} byte limit")]
    MessageTooLarge { size: u64, max: u64 },
}

/// Length-prefixed message framing over a bidirectional byte stream.
///
/// Every message on the wire is a big-endian u64 length followed by that
/// many payload bytes. Message boundaries are what the protocol calls
/// frames: the decoder always receives a whole message, never a window into
/// a larger stream.
#[derive(Debug)]
pub struct MessageTransport<T: Read + Write> {
    stream: T,
}

impl<T: Read + Write> MessageTransport<T> {
    pub fn new(stream: T) -> Self {
        Self { stream }
    }

    /// Writes one message and flushes it.
    pub fn send(&mut self, payload: &[u8]) -> Result<(), TransportError> {
        self.stream.write_all(&(payload.len() as u64).to_be_bytes())?;
        self.stream.write_all(payload)?;
        self.stream.flush()?;
        trace!("sent message of {} byte(s)", payload.len());
        Ok(())
    }

    /// Reads exactly one message, blocking until it is complete.
    ///
    /// EOF before a full message is an error; a message is delivered whole
    /// or not at all.
    pub fn recv(&mut self) -> Result<Vec<u8>, TransportError> {
        let mut prefix = [0u8; 8];
        self.stream.read_exact(&mut prefix)?;

        let len = u64::from_be_bytes(prefix);
        if len > MAX_MESSAGE_SIZE {
            return Err(TransportError::MessageTooLarge {
                size: len,
                max: MAX_MESSAGE_SIZE,
            });
        }

        let mut payload = vec![0u8; len as usize];
        self.stream.read_exact(&mut payload)?;
        trace!("received message of {len} byte(s)");
        Ok(payload)
    }
}
