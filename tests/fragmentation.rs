use bytes::{Bytes, BytesMut};
use proptest::prelude::*;
use strait::ParseResult;
use strait::h1::{Reject, Request, Response, WriteOptions};
use strait::http::Method;

const REQUESTS: &[&[u8]] = &[
    b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n",
    b"\r\n\r\nGET http://example.com:8080/a/b?c=d HTTP/1.1\r\n\
      Host: ignored\r\n\
      Cookie: a=1; b=\"2\"\r\n\
      Accept: text/*, text/html;q=0.5\r\n\
      If-None-Match: W/\"x\", \"y\"\r\n\
      Referer: /from\r\n\
      X-Forwarded-For: 192.168.0.1:8080, 2001:db8::1\r\n\
      Connection: keep-alive, X-Hop\r\n\
      Keep-Alive: timeout=30\r\n\
      X-Hop: 1\r\n\
      X-Other: a\r\n\
      X-Other: b\r\n\
      \r\n",
    b"POST /upload HTTP/1.1\nHost: a\nContent-Length: 11\n\nhello world",
    b"POST / HTTP/1.1\r\n\
      Transfer-Encoding: chunked\r\n\
      \r\n\
      4\r\nWiki\r\n5;ext=1\r\npedia\r\nE\r\n in\r\n\r\nchunks.\r\n0\r\n\
      Cache-Control: no-store\r\n\
      \r\n",
];

const REJECTED: &[(&[u8], Reject)] = &[
    (b"GET / HTTP/1.1\r\nContent-Length: 1\r\nContent-Length: 2\r\n\r\n" as &[u8], Reject::DuplicateHeader),
    (b"GET / HTTP/1.1\r\nX-A: 1\r\n X-B: 2\r\n\r\n" as &[u8], Reject::LineFolding),
    (b"GET / HTTP/1.1\r\nX-A: 1\r\r\n\r\n" as &[u8], Reject::BareCr),
    (b"POST / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n1\r\nab\r\n" as &[u8], Reject::InvalidChunk),
    (b"POST / HTTP/1.1\r\nContent-Length: 3\r\nTransfer-Encoding: chunked\r\n\r\n" as &[u8], Reject::FramingConflict),
];

/// Everything observable about a parsed request.
fn snapshot(req: &Request) -> String {
    let mut head = BytesMut::new();
    req.head().write_head(WriteOptions::new(), &mut head);
    format!(
        "{req:?}\n{:?}\n{:?}\n{}",
        head,
        req.head().body().to_bytes(),
        req.head().body_wire_len(),
    )
}

/// Feed `input` split at every offset in `splits`.
fn feed(input: &'static [u8], splits: &[usize]) -> (Request, ParseResult<usize, Reject>) {
    let bytes = Bytes::from_static(input);
    let mut req = Request::new();
    let mut start = 0;
    for &end in splits.iter().chain(Some(&input.len())) {
        match req.feed(&bytes.slice(start..end)) {
            ParseResult::Pending => start = end,
            ParseResult::Ok(read) => return (req, ParseResult::Ok(start + read)),
            err => return (req, err),
        }
    }
    (req, ParseResult::Pending)
}

/// Split points of `len` bytes into `n` fragments of equal size, the last one takes the rest.
fn equal_splits(len: usize, n: usize) -> Vec<usize> {
    let size = len / n;
    (1..n).map(|i| i * size).collect()
}

#[test]
fn every_equal_split() {
    for input in REQUESTS {
        let (whole, result) = feed(input, &[]);
        assert_eq!(result, ParseResult::Ok(input.len()));
        let expected = snapshot(&whole);

        for n in 1..=input.len() {
            let (req, result) = feed(input, &equal_splits(input.len(), n));
            assert_eq!(result, ParseResult::Ok(input.len()), "{n} fragments");
            assert_eq!(snapshot(&req), expected, "{n} fragments");
        }
    }
}

#[test]
fn every_equal_split_rejects() {
    for (input, reason) in REJECTED {
        for n in 1..=input.len() {
            let (_, result) = feed(input, &equal_splits(input.len(), n));
            assert_eq!(result, ParseResult::Err(*reason), "{n} fragments");
        }
    }
}

#[test]
fn every_single_split() {
    for input in REQUESTS {
        let (whole, _) = feed(input, &[]);
        let expected = snapshot(&whole);
        for at in 0..=input.len() {
            let (req, result) = feed(input, &[at]);
            assert_eq!(result, ParseResult::Ok(input.len()), "split at {at}");
            assert_eq!(snapshot(&req), expected, "split at {at}");
        }
    }
}

#[test]
fn response_every_equal_split() {
    const INPUT: &[u8] = b"HTTP/1.1 200 OK\r\n\
        Transfer-Encoding: chunked\r\n\
        ETag: \"v1\"\r\n\
        Server: origin\r\n\
        \r\n\
        3\r\nabc\r\n0\r\n\r\n";
    let bytes = Bytes::from_static(INPUT);

    for n in 1..=INPUT.len() {
        let mut res = Response::for_method(Method::GET);
        let mut start = 0;
        let mut result = ParseResult::Pending;
        for end in equal_splits(INPUT.len(), n).into_iter().chain(Some(INPUT.len())) {
            result = res.feed(&bytes.slice(start..end));
            start = end;
        }
        assert!(result.is_ok(), "{n} fragments");
        assert!(res.is_complete(), "{n} fragments");
        assert_eq!(res.head().body(), "abc");
        assert_eq!(res.head().body_wire_len(), 11);
        assert_eq!(res.etag().unwrap().tag(), "v1");
    }
}

fn splits_strategy() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (0..REQUESTS.len()).prop_flat_map(|index| {
        let len = REQUESTS[index].len();
        (Just(index), prop::collection::vec(0..=len, 0..12))
    })
}

proptest! {
    #[test]
    fn random_splits((index, mut splits) in splits_strategy()) {
        let input = REQUESTS[index];
        splits.sort_unstable();

        let (whole, _) = feed(input, &[]);
        let (req, result) = feed(input, &splits);
        prop_assert_eq!(result, ParseResult::Ok(input.len()));
        prop_assert_eq!(snapshot(&req), snapshot(&whole));
    }

    #[test]
    fn arbitrary_bytes_never_panic(input in prop::collection::vec(any::<u8>(), 0..256), at in 0usize..256) {
        let bytes = Bytes::from(input);
        let at = at.min(bytes.len());
        let mut req = Request::new();
        match req.feed(&bytes.slice(..at)) {
            ParseResult::Pending => {
                let _ = req.feed(&bytes.slice(at..));
            }
            ParseResult::Ok(read) => prop_assert!(read <= at),
            ParseResult::Err(_) => prop_assert!(req.head().rejected().is_some()),
        }
    }
}
