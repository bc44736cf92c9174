use std::convert::Infallible;
use std::io::{Error as IoError, ErrorKind};
use std::marker::{Send, Unpin};
use std::result::Result;
use std::sync::Arc;

use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Empty, Full};
use hyper::body::Bytes;
use hyper::client::conn::http1::{handshake, SendRequest};
use hyper::header::{HeaderMap, HeaderName, HeaderValue, HOST};
use hyper::rt::{Read as HyperRead, Write as HyperWrite};
use hyper::{Error as HyperError, Method, Request, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;
use tokio_native_tls::{native_tls, TlsConnector};

use wms_common::logging::{app_log_event, AppLogContext, AppLogLevel};

type ReqBody = BoxBody<Bytes, Infallible>;

#[derive(Debug)]
pub enum BaseClientErrorReason {
    TcpNet(ErrorKind, String),
    SysIo(ErrorKind, String),
    Http {
        sender_closed: bool,
        parse_error: bool,
        req_cancelled: bool,
        message_corrupted: bool,
        timeout: bool,
        detail: String,
    },
    HttpRequest(String),
    Tls(String),
}

impl From<IoError> for BaseClientErrorReason {
    fn from(value: IoError) -> Self {
        let ekind = value.kind();
        match &ekind {
            ErrorKind::TimedOut
            | ErrorKind::AddrInUse
            | ErrorKind::NotConnected
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionRefused
            | ErrorKind::ConnectionAborted => Self::TcpNet(ekind, value.to_string()),
            _others => Self::SysIo(ekind, value.to_string()),
        }
    }
}
impl From<HyperError> for BaseClientErrorReason {
    fn from(value: HyperError) -> Self {
        Self::Http {
            sender_closed: value.is_closed(),
            parse_error: value.is_parse_status() | value.is_parse(),
            timeout: value.is_timeout(),
            message_corrupted: value.is_incomplete_message() | value.is_body_write_aborted(),
            req_cancelled: value.is_canceled(),
            detail: value.to_string(),
        }
    }
}
impl From<native_tls::Error> for BaseClientErrorReason {
    fn from(value: native_tls::Error) -> Self {
        Self::Tls(value.to_string())
    }
}

#[derive(Debug)]
pub struct BaseClientError {
    pub reason: BaseClientErrorReason,
}

/// single HTTP/1.1 connection to the backend, one instance per API call
pub(super) struct BaseClient {
    req_sender: SendRequest<ReqBody>,
    logctx: Arc<AppLogContext>,
    host: String,
    port: u16,
}

impl BaseClient {
    pub(super) async fn try_build(
        logctx: Arc<AppLogContext>,
        secure_connector: Option<&TlsConnector>,
        host: String,
        port: u16,
    ) -> Result<Self, BaseClientError> {
        let logctx_cpy = logctx.clone();
        let tcp_stream = TcpStream::connect((host.as_str(), port))
            .await
            .map_err(|e| {
                app_log_event!(
                    logctx_cpy,
                    AppLogLevel::ERROR,
                    "tcp-conn-err, {host}:{port}, {:?}",
                    &e
                );
                BaseClientError { reason: e.into() }
            })?;
        let req_sender = if let Some(connector) = secure_connector {
            let tls_stream = connector
                .connect(host.as_str(), tcp_stream)
                .await
                .map_err(|e| BaseClientError { reason: e.into() })?;
            Self::_handshake(TokioIo::new(tls_stream), logctx.clone(), &host, port).await?
        } else {
            Self::_handshake(TokioIo::new(tcp_stream), logctx.clone(), &host, port).await?
        };
        Ok(Self {
            req_sender,
            logctx,
            host,
            port,
        })
    } // end of fn try-build

    async fn _handshake<T>(
        io: T,
        logctx: Arc<AppLogContext>,
        host: &str,
        port: u16,
    ) -> Result<SendRequest<ReqBody>, BaseClientError>
    where
        T: HyperRead + HyperWrite + Unpin + Send + 'static,
    {
        let (req_sender, connector) = handshake(io)
            .await
            .map_err(|e| BaseClientError { reason: e.into() })?;
        let remote_label = format!("{host}:{port}");
        let _handle = tokio::spawn(async move {
            if let Err(e) = connector.await {
                app_log_event!(
                    logctx,
                    AppLogLevel::WARNING,
                    "remote server: {remote_label}, {:?}",
                    e
                );
            }
            app_log_event!(logctx, AppLogLevel::DEBUG, "connector-end");
        });
        Ok(req_sender)
    }

    async fn _execute(
        &mut self,
        req: Request<ReqBody>,
    ) -> Result<(Vec<u8>, StatusCode), BaseClientError> {
        let logctx_p = &self.logctx;
        let uri_log = req.uri().to_string();
        let mut resp = self.req_sender.send_request(req).await.map_err(|e| {
            app_log_event!(logctx_p, AppLogLevel::WARNING, "{:?}", e);
            BaseClientError { reason: e.into() }
        })?;
        let body = resp.body_mut();
        let mut raw_collected = Vec::<u8>::new();
        while let Some(nxt) = body.frame().await {
            let frm = nxt.map_err(|e| BaseClientError { reason: e.into() })?;
            if let Ok(chunk) = frm.into_data() {
                raw_collected.extend(chunk.to_vec());
            } // trailers are discarded
        }
        let status_code = resp.status();
        app_log_event!(
            logctx_p,
            AppLogLevel::DEBUG,
            "server:{}:{}, uri:{}, resp-status:{}",
            self.host.as_str(),
            self.port,
            uri_log,
            status_code.as_u16()
        );
        Ok((raw_collected, status_code))
    } // end of fn _execute

    fn append_necessary_headers(
        &self,
        dst: &mut HeaderMap,
        wr_data: Vec<(HeaderName, HeaderValue)>,
    ) -> Result<(), BaseClientError> {
        wr_data
            .into_iter()
            .map(|(k, v)| {
                let _old = dst.insert(k, v);
            })
            .count();
        let host_val = format!("{}:{}", self.host, self.port);
        let host_val = HeaderValue::from_str(host_val.as_str()).map_err(|e| BaseClientError {
            reason: BaseClientErrorReason::HttpRequest(e.to_string()),
        })?;
        let _discarded = dst.insert(HOST, host_val);
        Ok(())
    }

    pub(super) async fn execute(
        &mut self,
        path: &str,
        method: Method,
        headers: Vec<(HeaderName, HeaderValue)>,
        rawbody: Option<Vec<u8>>,
    ) -> Result<(Vec<u8>, StatusCode), BaseClientError> {
        let body: ReqBody = if let Some(v) = rawbody {
            BoxBody::new(Full::new(Bytes::from(v)))
        } else {
            BoxBody::new(Empty::<Bytes>::new())
        };
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .body(body)
            .map_err(|e| BaseClientError {
                reason: BaseClientErrorReason::HttpRequest(e.to_string()),
            })?;
        self.append_necessary_headers(req.headers_mut(), headers)?;
        self._execute(req).await
    }
} // end of impl BaseClient
