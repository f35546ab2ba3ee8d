use std::io;
use std::net::TcpStream;

use log::{debug, info};
use thiserror::Error;

use super::{
    decoder::{self, DecodeError},
    result::QueryResult,
    transport::{MessageTransport, TransportError},
};

#[derive(Debug, Error)]
pub enum ClientError {
    /// The channel to the server could not be established.
    #[error("failed to connect to {addr}: {source}")]
    Connection { addr: String, source: io::Error },

    /// The channel failed mid-exchange.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The reply frames violated the wire protocol.
    #[error("malformed response from server: {0}")]
    MalformedResponse(#[from] DecodeError),
}

/// Synchronous client for a Sequent server.
///
/// A client is connected for its whole lifetime: [`QueryClient::connect`] is
/// the only constructor, and reconnecting means constructing a new client.
/// One query is outstanding at a time; [`QueryClient::exec_query`] blocks
/// until the full two-frame reply has arrived and decoded. A malformed reply
/// fails that call but leaves the connection usable for the next query.
#[derive(Debug)]
pub struct QueryClient {
    transport: MessageTransport<TcpStream>,
    addr: String,
}

impl QueryClient {
    /// Connects to the server at `host:port`.
    pub fn connect(host: &str, port: u16) -> Result<Self, ClientError> {
        let addr = format!("{host}:{port}");
        let stream = TcpStream::connect(&addr).map_err(|source| ClientError::Connection {
            addr: addr.clone(),
            source,
        })?;

        info!("connected to sequent server at {addr}");
        Ok(Self {
            transport: MessageTransport::new(stream),
            addr,
        })
    }

    /// Address this client connected to.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Executes `query` and blocks for the decoded result.
    ///
    /// The query text goes out as one opaque message; the reply is exactly
    /// two messages, the header frame then the row frame, decoded together
    /// into a [`QueryResult`].
    pub fn exec_query(&mut self, query: &str) -> Result<QueryResult, ClientError> {
        debug!("sending {} byte query to {}", query.len(), self.addr);
        self.transport.send(query.as_bytes())?;

        let header_bytes = self.transport.recv()?;
        let row_bytes = self.transport.recv()?;
        debug!(
            "reply received: {} header byte(s), {} row byte(s)",
            header_bytes.len(),
            row_bytes.len()
        );

        let result = decoder::decode_result(&header_bytes, &row_bytes)?;
        info!("query returned {} row(s)", result.row_count());
        Ok(result)
    }
}
