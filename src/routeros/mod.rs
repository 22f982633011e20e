// RouterOS API client (plaintext login) backing the collaborator traits

pub mod codec;
pub mod reply;

use async_trait::async_trait;
use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio::time::{Duration, timeout};
use tracing::{debug, info, instrument, warn};

use crate::config::RouterConfig;
use crate::error::TransportError;
use crate::models::RawRecord;
use crate::transport::{CollectionFetcher, ProcedureInvoker};
use reply::Reply;

const SCRIPT_RUN_COMMAND: &str = "/system/script/run";

/// One open, logged-in API connection.
struct Session {
    stream: TcpStream,
    buf: BytesMut,
}

impl Session {
    async fn write_sentence(&mut self, words: &[String]) -> Result<(), TransportError> {
        let mut out = BytesMut::new();
        codec::encode_sentence(words, &mut out)?;
        self.stream.write_all(&out).await?;
        Ok(())
    }

    async fn read_sentence(&mut self) -> Result<Vec<String>, TransportError> {
        loop {
            if let Some(words) = codec::decode_sentence(&mut self.buf)? {
                return Ok(words);
            }
            if self.stream.read_buf(&mut self.buf).await? == 0 {
                return Err(TransportError::Io("connection closed by device".into()));
            }
        }
    }

    /// Send one command and read until `!done`. `!re` records are returned in
    /// order; a `!trap` turns the whole reply into an error once `!done`
    /// arrives.
    async fn talk(&mut self, words: &[String]) -> Result<Vec<RawRecord>, TransportError> {
        self.write_sentence(words).await?;
        let mut records = Vec::new();
        let mut trap: Option<String> = None;
        loop {
            match Reply::parse(self.read_sentence().await?)? {
                Reply::Re(record) => records.push(record),
                Reply::Done(_) => break,
                Reply::Trap { message } => {
                    trap.get_or_insert(message);
                }
                Reply::Fatal(message) => return Err(TransportError::Fatal(message)),
                Reply::Empty => {}
            }
        }
        match trap {
            Some(message) => Err(TransportError::Trap { message }),
            None => Ok(records),
        }
    }
}

/// Serialised access to one device. The connection is opened on first use
/// and dropped after any error that leaves it unusable; the next request
/// reconnects.
pub struct RouterOsClient {
    addr: String,
    username: String,
    password: String,
    timeout: Duration,
    session: Mutex<Option<Session>>,
}

impl RouterOsClient {
    pub fn new(config: &RouterConfig) -> Self {
        Self {
            addr: format!("{}:{}", config.host, config.port),
            username: config.username.clone(),
            password: config.password.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            session: Mutex::new(None),
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Open and log in eagerly so bad credentials show up at startup.
    pub async fn connect(&self) -> Result<(), TransportError> {
        self.request("/system/identity/print", &[]).await.map(|_| ())
    }

    async fn open(&self) -> Result<Session, TransportError> {
        let stream = TcpStream::connect(&self.addr)
            .await
            .map_err(|e| TransportError::Connect {
                addr: self.addr.clone(),
                reason: e.to_string(),
            })?;
        stream.set_nodelay(true)?;
        let mut session = Session {
            stream,
            buf: BytesMut::with_capacity(4096),
        };
        session
            .talk(&[
                "/login".to_string(),
                format!("=name={}", self.username),
                format!("=password={}", self.password),
            ])
            .await?;
        info!(addr = %self.addr, user = %self.username, "Logged in to router");
        Ok(session)
    }

    #[instrument(skip(self, args), fields(repo = "routeros"))]
    async fn request(
        &self,
        command: &str,
        args: &[String],
    ) -> Result<Vec<RawRecord>, TransportError> {
        let mut words = Vec::with_capacity(args.len() + 1);
        words.push(command.to_string());
        words.extend_from_slice(args);

        let mut slot = self.session.lock().await;
        let exchange = async {
            let mut session = match slot.take() {
                Some(session) => session,
                None => self.open().await?,
            };
            let result = session.talk(&words).await;
            match &result {
                Err(e) if e.breaks_session() => {
                    warn!(error = %e, addr = %self.addr, "Dropping router session");
                }
                _ => *slot = Some(session),
            }
            result
        };
        let result = match timeout(self.timeout, exchange).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout {
                seconds: self.timeout.as_secs(),
            }),
        };
        if let Ok(records) = &result {
            debug!(records = records.len(), "Router request finished");
        }
        result
    }
}

#[async_trait]
impl CollectionFetcher for RouterOsClient {
    async fn fetch(&self, path: &str) -> Result<Vec<RawRecord>, TransportError> {
        self.request(&format!("{}/print", path), &[]).await
    }
}

#[async_trait]
impl ProcedureInvoker for RouterOsClient {
    async fn invoke(&self, name: &str) -> Result<(), TransportError> {
        self.request(SCRIPT_RUN_COMMAND, &[format!("=number={}", name)])
            .await
            .map(|_| ())
    }
}
