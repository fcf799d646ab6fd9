use quick_info::frontend::context::{FrontendContext, HttpOptions};
use quick_info::frontend::http::listener::serve;
use quick_info::frontend::server_state::ServerState;
use quick_info::query::{AnswerEngine, DispatchPolicy, EngineSettings};
use quick_info::resolvers::default_registry;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

fn context() -> Arc<FrontendContext> {
    let engine = AnswerEngine::new(
        Arc::new(default_registry(DispatchPolicy::FailFast)),
        EngineSettings::default(),
    );
    FrontendContext::new(
        engine,
        ServerState::new(0),
        HttpOptions {
            http_addr: "127.0.0.1:0".to_string(),
            keep_alive: false,
            max_connections: 4,
            serve_static: true,
            timeout: Some(Duration::from_secs(5)),
        },
    )
}

async fn send(addr: SocketAddr, request_line: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    let request = format!("{request_line}\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.expect("write");

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.expect("read");
    String::from_utf8(raw).expect("utf-8 response")
}

#[tokio::test]
async fn serves_answers_until_shutdown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let ctx = context();
    let server = tokio::spawn(serve(listener, Arc::clone(&ctx)));

    let response = send(addr, "GET /api/answers/?query=127.0.0.1%7Cip HTTP/1.1").await;
    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.contains("access-control-allow-origin: *"));
    assert!(response.contains("<div class=\"answerBlockHeader\">127.0.0.1</div>"));
    assert!(response.contains("loopback"));
    assert!(response.contains("Your IP address"));

    let response = send(addr, "DELETE /api/answers/ HTTP/1.1").await;
    assert!(response.starts_with("HTTP/1.1 405"));

    let response = send(addr, "GET /static/styles.css HTTP/1.1").await;
    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.contains("text/css"));

    ctx.server_state.signal_shutdown();
    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server stops after shutdown")
        .expect("server task");
    assert!(result.is_ok());
}
