#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::{Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::oneshot;

/// A question as it reached the mock server.
#[derive(Debug, Clone)]
pub struct ReceivedQuery {
    pub protocol: &'static str,
    pub recursion_desired: bool,
    pub name: String,
    pub record_type: RecordType,
}

struct ZoneAnswer {
    rcode: ResponseCode,
    records: Vec<Record>,
}

#[derive(Default)]
struct ServerState {
    answers: HashMap<(String, RecordType), ZoneAnswer>,
    truncate_udp: bool,
    mismatch_id: bool,
    received: Vec<ReceivedQuery>,
}

/// Loopback DNS server answering over UDP and TCP on the same port.
///
/// Unknown questions get NXDOMAIN.
pub struct MockDnsServer {
    addr: SocketAddr,
    state: Arc<Mutex<ServerState>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        let (listener, socket) = Self::bind_pair().await?;
        let addr = socket.local_addr()?;
        let state = Arc::new(Mutex::new(ServerState::default()));

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let task_state = Arc::clone(&state);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = respond(&task_state, &buf[..len], "UDP") {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((stream, _)) = result {
                            tokio::spawn(serve_tcp(stream, Arc::clone(&task_state)));
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    // UDP and TCP must share a port; retry if the UDP side is taken.
    async fn bind_pair() -> Result<(TcpListener, UdpSocket), std::io::Error> {
        let mut last_error = None;
        for _ in 0..16 {
            let listener = TcpListener::bind("127.0.0.1:0").await?;
            let addr = listener.local_addr()?;
            match UdpSocket::bind(addr).await {
                Ok(socket) => return Ok((listener, socket)),
                Err(e) => last_error = Some(e),
            }
        }
        Err(last_error.unwrap_or_else(|| std::io::Error::other("no free port pair")))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn answer(&self, name: &str, record_type: RecordType, rcode: ResponseCode, records: Vec<Record>) {
        self.state.lock().unwrap().answers.insert(
            (name.to_lowercase(), record_type),
            ZoneAnswer { rcode, records },
        );
    }

    pub fn records(&self, name: &str, record_type: RecordType, records: Vec<Record>) {
        self.answer(name, record_type, ResponseCode::NoError, records);
    }

    /// Every UDP answer comes back empty with TC set.
    pub fn truncate_udp(&self) {
        self.state.lock().unwrap().truncate_udp = true;
    }

    /// Answers carry an ID that does not match the query.
    pub fn mismatch_id(&self) {
        self.state.lock().unwrap().mismatch_id = true;
    }

    pub fn received(&self) -> Vec<ReceivedQuery> {
        self.state.lock().unwrap().received.clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_tcp(mut stream: TcpStream, state: Arc<Mutex<ServerState>>) {
    let mut len_buf = [0u8; 2];
    if stream.read_exact(&mut len_buf).await.is_err() {
        return;
    }

    let mut request = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    if stream.read_exact(&mut request).await.is_err() {
        return;
    }

    if let Some(response) = respond(&state, &request, "TCP") {
        let _ = stream
            .write_all(&(response.len() as u16).to_be_bytes())
            .await;
        let _ = stream.write_all(&response).await;
    }
}

fn respond(state: &Mutex<ServerState>, request_bytes: &[u8], protocol: &'static str) -> Option<Vec<u8>> {
    let request = Message::from_vec(request_bytes).ok()?;
    let query = request.queries().first()?.clone();
    let key = (query.name().to_utf8().to_lowercase(), query.query_type());

    let mut state = state.lock().unwrap();
    state.received.push(ReceivedQuery {
        protocol,
        recursion_desired: request.recursion_desired(),
        name: key.0.clone(),
        record_type: key.1,
    });

    let id = if state.mismatch_id {
        request.id().wrapping_add(1)
    } else {
        request.id()
    };

    let mut response = Message::new(id, MessageType::Response, OpCode::Query);
    response.set_recursion_desired(request.recursion_desired());
    response.set_authoritative(true);
    response.add_query(query);

    if protocol == "UDP" && state.truncate_udp {
        response.set_truncated(true);
        return response.to_vec().ok();
    }

    match state.answers.get(&key) {
        Some(answer) => {
            response.set_response_code(answer.rcode);
            for record in &answer.records {
                response.add_answer(record.clone());
            }
        }
        None => {
            response.set_response_code(ResponseCode::NXDomain);
        }
    }

    response.to_vec().ok()
}
