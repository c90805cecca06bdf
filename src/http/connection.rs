use std::path::Path;

use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::access_log::AccessLog;
use crate::config::StaticFilesConfig;
use crate::http::parser::parse_request_line;
use crate::http::request::Method;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::static_files::{self, Resolution};

// A request line longer than this is not worth reading further.
const MAX_REQUEST_LINE: usize = 8 * 1024;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    state: ConnectionState,
    static_files: StaticFilesConfig,
    access_log: AccessLog,
}

enum ConnectionState {
    Reading,
    Processing(String),
    Writing(ResponseWriter, PendingEntry),
    Closed,
}

// What the access logger needs once the response is on the wire.
struct PendingEntry {
    request_line: String,
    status: StatusCode,
    body_len: usize,
}

impl Connection {
    pub fn new(stream: TcpStream, static_files: StaticFilesConfig, access_log: AccessLog) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(1024),
            state: ConnectionState::Reading,
            static_files,
            access_log,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    let line = self.read_request_line().await?;
                    self.state = ConnectionState::Processing(line);
                }

                ConnectionState::Processing(line) => {
                    let line = std::mem::take(line);
                    let (response, include_body) =
                        Self::respond(&self.static_files.root, &line).await;

                    let entry = PendingEntry {
                        request_line: line,
                        status: response.status,
                        body_len: response.content_length(),
                    };
                    let writer = ResponseWriter::new(&response, include_body);
                    self.state = ConnectionState::Writing(writer, entry);
                }

                ConnectionState::Writing(writer, entry) => {
                    let result = writer.write_to_stream(&mut self.stream).await;

                    // Exactly one log call per handled request, even if
                    // the client went away mid-write.
                    self.access_log
                        .record(&entry.request_line, entry.status, entry.body_len)
                        .await;

                    self.state = ConnectionState::Closed;
                    result?;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads up to the first line feed and returns the line without its
    /// terminator. A client that closes early yields whatever was
    /// received, possibly an empty line; validation decides from there.
    async fn read_request_line(&mut self) -> anyhow::Result<String> {
        loop {
            if let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
                let line = self.buffer.split_to(pos + 1);
                return Ok(trim_line_break(&line));
            }

            // Prevent unbounded request line growth
            if self.buffer.len() > MAX_REQUEST_LINE {
                return Err(anyhow::anyhow!("request line too long"));
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                let line = self.buffer.split_to(self.buffer.len());
                return Ok(trim_line_break(&line));
            }
        }
    }

    // Validation, resolution and body retrieval for one request. Returns
    // the response plus whether its body goes on the wire (GET) or only
    // its length does (HEAD).
    async fn respond(root: &Path, line: &str) -> (Response, bool) {
        let request = match parse_request_line(line) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!("rejected request line {:?}: {:?}", line, err);
                return (Response::empty(err.status()), true);
            }
        };

        match static_files::resolve(root, &request.target).await {
            Resolution::Missing => (Response::empty(StatusCode::NotFound), true),
            Resolution::Unreadable => (Response::empty(StatusCode::Forbidden), true),
            Resolution::Servable(path) => match static_files::read_lines_crlf(&path).await {
                Ok(body) => (Response::ok(body), request.method == Method::GET),
                Err(err) => {
                    // The file resolved as servable a moment ago; the
                    // failed read is an internal fault, not a crash.
                    tracing::error!("read of {} failed: {}", path.display(), err);
                    (Response::empty(StatusCode::InternalServerError), true)
                }
            },
        }
    }
}

fn trim_line_break(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    text.trim_end_matches(|c| c == '\r' || c == '\n').to_string()
}
