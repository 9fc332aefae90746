use strait::h1::Reject;
use strait::http::Method;
use strait::io::{MessageReader, ReadError};
use tokio::io::AsyncWriteExt;

#[tokio::test]
async fn pipelined_requests() {
    let input: &[u8] = b"GET /a HTTP/1.1\r\nHost: a\r\n\r\n\
        POST /b HTTP/1.1\r\nHost: a\r\nContent-Length: 3\r\n\r\nxyz\
        GET /c HTTP/1.1\r\nHost: a\r\n\r\n";
    let mut reader = MessageReader::new(input);

    let first = reader.read_request().await.unwrap().unwrap();
    assert_eq!(first.path(), "/a");

    let second = reader.read_request().await.unwrap().unwrap();
    assert_eq!(second.method(), Method::POST);
    assert_eq!(second.head().body(), "xyz");

    let third = reader.read_request().await.unwrap().unwrap();
    assert_eq!(third.path(), "/c");

    assert!(reader.read_request().await.unwrap().is_none());
}

#[tokio::test]
async fn trailing_empty_lines_before_close() {
    let input: &[u8] = b"GET / HTTP/1.1\r\nHost: a\r\n\r\n\r\n\n";
    let mut reader = MessageReader::new(input);

    let req = reader.read_request().await.unwrap().unwrap();
    assert_eq!(req.host(), "a");
    assert!(reader.read_request().await.unwrap().is_none());

    let (mut client, server) = tokio::io::duplex(1);
    let mut reader = MessageReader::new(server);
    let writer = tokio::spawn(async move {
        client.write_all(b"\r\n\r\n").await.unwrap();
    });
    assert!(reader.read_request().await.unwrap().is_none());
    writer.await.unwrap();
}

#[tokio::test]
async fn fragmented_transport() {
    let (mut client, server) = tokio::io::duplex(4);
    let mut reader = MessageReader::new(server);

    let writer = tokio::spawn(async move {
        client
            .write_all(b"GET / HTTP/1.1\r\nHost: example.com\r\nCookie: id=42\r\n\r\n")
            .await
            .unwrap();
        client
            .write_all(b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n2\r\nok\r\n0\r\n\r\n")
            .await
            .unwrap();
        client.write_all(b"HTTP/1.0 200 OK\r\n\r\nuntil close").await.unwrap();
    });

    let req = reader.read_request().await.unwrap().unwrap();
    assert_eq!(req.host(), "example.com");
    assert_eq!(req.cookie(b"id").unwrap(), "42");

    let res = reader.read_response(&req).await.unwrap();
    assert_eq!(res.head().body(), "ok");

    let res = reader.read_response_for(Method::GET).await.unwrap();
    assert_eq!(res.head().body(), "until close");

    writer.await.unwrap();
}

#[tokio::test]
async fn rejected_and_truncated() {
    let mut reader = MessageReader::new(&b"GET / HTTP/1.1\r\nHost : a\r\n\r\n"[..]);
    match reader.read_request().await {
        Err(ReadError::Reject(reason)) => assert_eq!(reason, Reject::InvalidHeaderName),
        other => panic!("expected reject, got {other:?}"),
    }

    let mut reader = MessageReader::new(&b"GET / HTTP/1.1\r\nHost: a\r\n"[..]);
    match reader.read_request().await {
        Err(ReadError::Reject(reason)) => assert_eq!(reason, Reject::UnexpectedEof),
        other => panic!("expected reject, got {other:?}"),
    }

    let mut reader = MessageReader::new(&b""[..]);
    match reader.read_response_for(Method::GET).await {
        Err(ReadError::Reject(reason)) => assert_eq!(reason, Reject::UnexpectedEof),
        other => panic!("expected reject, got {other:?}"),
    }
}
