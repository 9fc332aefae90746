use bytes::Bytes;

use crate::headers::{Direction, HeaderField, HeaderId, HeaderLine, HeaderTable};
use crate::strview::StrView;

const fn is_send_sync<T: Send + Sync>() { }
const _: () = {
    is_send_sync::<HeaderTable>();
    is_send_sync::<HeaderField>();
    is_send_sync::<HeaderLine>();
};

fn line(src: &'static str) -> HeaderLine {
    let colon = src.find(':').unwrap();
    let value = colon + 1 + src[colon + 1..].bytes().take_while(|b| *b == b' ').count();
    HeaderLine::new(StrView::from(Bytes::from_static(src.as_bytes())), colon, value, 2).unwrap()
}

#[test]
fn header_line() {
    let l = line("X-Custom:  value  ");
    assert_eq!(l.name(), "X-Custom");
    assert_eq!(l.value(), "value  ");
    assert_eq!(l.trimmed_value(), "value");
    assert_eq!(l.line(), &"X-Custom:  value  ");
    assert_eq!(l.eol(), 2);
}

#[test]
fn header_table() {
    let mut table = HeaderTable::new(Direction::Request);
    assert!(table.is_empty());

    assert!(table.push_known(HeaderId::Host, line("Host: example.com")));
    assert!(table.contains(HeaderId::Host));
    assert_eq!(table.get(HeaderId::Host).unwrap().value(), "example.com");

    assert!(table.push_known(HeaderId::CacheControl, line("Cache-Control: no-cache")));
    assert!(!table.push_known(HeaderId::CacheControl, line("Cache-Control: max-age=5")));
    let cc = table.get(HeaderId::CacheControl).unwrap();
    assert_eq!(cc.len(), 2);
    let values: Vec<_> = cc.iter().map(HeaderLine::value).collect();
    assert_eq!(values, ["no-cache", "max-age=5"]);

    assert_eq!(table.push_raw(line("X-A: 1")), 0);
    assert_eq!(table.push_raw(line("X-B: 2")), 1);
    assert_eq!(table.push_raw(line("x-a: 3")), 0);
    assert_eq!(table.raw(0).unwrap().len(), 2);
    assert_eq!(table.raw(1).unwrap().value(), "2");
    assert_eq!(table.find_raw(b"X-b"), Some(1));
    assert_eq!(table.lines(), 6);

    assert_eq!(table.get_by_name(b"HOST").unwrap().value(), "example.com");
    assert_eq!(table.get_by_name(b"x-b").unwrap().value(), "2");
    assert!(table.get_by_name(b"x-c").is_none());

    assert_eq!(table.iter().count(), 4);
}

#[test]
fn header_table_hop_by_hop() {
    let mut table = HeaderTable::new(Direction::Response);
    table.push_known(HeaderId::KeepAlive, line("Keep-Alive: timeout=5"));
    table.push_raw(line("X-Hop: 1"));
    // request only name in a response is raw
    table.push_raw(line("Host: example.com"));

    assert!(table.mark_by_name(b"keep-alive"));
    assert!(table.mark_by_name(b"X-HOP"));
    assert!(!table.mark_by_name(b"X-Absent"));
    assert!(!table.mark_known(HeaderId::Server));

    assert!(table.get(HeaderId::KeepAlive).unwrap().is_hop_by_hop());
    assert!(table.raw(0).unwrap().is_hop_by_hop());
    assert!(!table.raw(1).unwrap().is_hop_by_hop());
    assert_eq!(table.get_by_name(b"host").unwrap().value(), "example.com");
}
