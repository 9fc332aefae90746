use super::*;
use crate::h1::Reject;

#[test]
fn test_elements() {
    let split = |s: &'static [u8]| -> Vec<&'static [u8]> { Elements::new(s).map(|r| &s[r]).collect() };
    assert_eq!(split(b"a, b ,c"), [&b"a"[..], &b"b"[..], &b"c"[..]]);
    assert_eq!(split(b"a,,b"), [&b"a"[..], &b""[..], &b"b"[..]]);
    assert_eq!(split(b"x=\"1,2\", y"), [&b"x=\"1,2\""[..], &b"y"[..]]);
    assert_eq!(split(b""), [&b""[..]]);
    assert_eq!(split(b"a,"), [&b"a"[..], &b""[..]]);
}

#[test]
fn test_quoted() {
    assert_eq!(quoted_len(b"\"abc\" rest"), Some(5));
    assert_eq!(quoted_len(b"\"a\\\"b\""), Some(6));
    assert_eq!(quoted_len(b"\"abc"), None);
    assert_eq!(quoted_len(b"abc\""), None);
    assert_eq!(parameter(b"max-age = 5"), Some((&b"max-age"[..], Some(&b"5"[..]))));
    assert_eq!(parameter(b"private=\"x, y\""), Some((&b"private"[..], Some(&b"\"x, y\""[..]))));
    assert_eq!(parameter(b"no-cache"), Some((&b"no-cache"[..], None)));
    assert_eq!(parameter(b"a b"), None);
    assert_eq!(parameter(b"=1"), None);
}

#[test]
fn test_content_length() {
    assert_eq!(content_length(b"0"), Ok(0));
    assert_eq!(content_length(b"1234"), Ok(1234));
    assert_eq!(content_length(b"-1"), Err(Reject::InvalidContentLength));
    assert_eq!(content_length(b"+1"), Err(Reject::InvalidContentLength));
    assert_eq!(content_length(b"1 2"), Err(Reject::InvalidContentLength));
    assert_eq!(content_length(b"0x10"), Err(Reject::InvalidContentLength));
    assert_eq!(
        content_length(b"99999999999999999999"),
        Err(Reject::InvalidContentLength)
    );
}

#[test]
fn test_codings() {
    macro_rules! test {
        ($($line:literal),* => chunked) => {
            let mut codings = Codings::default();
            $(codings.push($line).unwrap();)*
            assert!(codings.is_chunked());
            assert_eq!(codings.finish(), Ok(()));
        };
        ($($line:literal),* => finish) => {
            let mut codings = Codings::default();
            $(codings.push($line).unwrap();)*
            assert_eq!(codings.finish(), Err(Reject::InvalidCodings));
        };
        ($($line:literal),* => push) => {
            let mut codings = Codings::default();
            let mut result = Ok(());
            $(if result.is_ok() { result = codings.push($line); })*
            assert_eq!(result, Err(Reject::InvalidCodings));
        };
    }

    test!(b"chunked" => chunked);
    test!(b"CHUNKED" => chunked);
    test!(b"gzip, chunked" => chunked);
    test!(b"gzip", b"chunked" => chunked);
    test!(b"chunked, gzip" => finish);
    test!(b"gzip" => finish);
    test!(b"chunked", b"gzip" => finish);
    test!(b"gzip, chunked", b"chunked" => push);
    test!(b"chunked, chunked" => push);
    test!(b"" => push);
    test!(b"gzip,, chunked" => push);
    test!(b"chunked;foo=bar" => push);
}

#[test]
fn test_connection() {
    let mut opts = ConnectionOptions::default();
    let bytes = b"Keep-Alive, X-Custom";
    let names = parse_connection(bytes, &mut opts).unwrap();
    let names: Vec<_> = names.into_iter().map(|r| &bytes[r]).collect();
    assert_eq!(names, [&b"Keep-Alive"[..], &b"X-Custom"[..]]);
    assert!(opts.keep_alive);
    assert!(!opts.close);

    let mut opts = ConnectionOptions::default();
    assert!(parse_connection(b"close", &mut opts).unwrap().is_empty());
    assert!(opts.close);
    assert_eq!(parse_connection(b"keep-alive", &mut opts), Err(Reject::InvalidConnection));

    macro_rules! test {
        ($input:literal, $err:ident) => {
            let mut opts = ConnectionOptions::default();
            assert_eq!(parse_connection($input, &mut opts), Err(Reject::$err));
        };
    }

    test!(b"Host", ProtectedHopByHop);
    test!(b"content-length", ProtectedHopByHop);
    test!(b"X-Forwarded-For", ProtectedHopByHop);
    test!(b"Authorization", ProtectedHopByHop);
    test!(b"Connection", ProtectedHopByHop);
    test!(b"a,,b", InvalidConnection);
    test!(b"\"close\"", InvalidConnection);
    test!(b"", InvalidConnection);
    test!(b"a1,a2,a3,a4,a5,a6,a7,a8,a9,a10,a11,a12,a13,a14,a15,a16,a17", TooManyConnectionTokens);

    let mut opts = ConnectionOptions::default();
    assert!(parse_connection(b"a1,a2,a3,a4,a5,a6,a7,a8", &mut opts).is_ok());
    assert!(parse_connection(b"a9,a10,a11,a12,a13,a14,a15,a16", &mut opts).is_ok());
    assert_eq!(
        parse_connection(b"a17", &mut opts),
        Err(Reject::TooManyConnectionTokens)
    );
}

#[test]
fn test_cache_control() {
    let mut cc = CacheControl::default();
    parse_cache_control(b"no-cache, max-age=10, private=\"Set-Cookie\", foo", &mut cc).unwrap();
    assert!(cc.no_cache());
    assert!(cc.private());
    assert!(!cc.no_store());
    assert_eq!(cc.max_age(), Some(10));

    parse_cache_control(b"NO-STORE, min-fresh=5, s-maxage=\"7\", max-stale", &mut cc).unwrap();
    assert!(cc.no_store());
    assert_eq!(cc.min_fresh(), Some(5));
    assert_eq!(cc.s_maxage(), Some(7));
    assert!(cc.has_max_stale());
    assert_eq!(cc.max_stale(), None);

    parse_cache_control(b"max-age=99999999999, public, must-revalidate", &mut cc).unwrap();
    assert_eq!(cc.max_age(), Some(u32::MAX));
    assert!(cc.public());
    assert!(cc.must_revalidate());

    let mut cc = CacheControl::default();
    assert_eq!(parse_cache_control(b"max-age=", &mut cc), Err(Reject::InvalidCacheControl));
    assert_eq!(parse_cache_control(b"max-age=abc", &mut cc), Err(Reject::InvalidCacheControl));
    assert_eq!(parse_cache_control(b"max-age", &mut cc), Err(Reject::InvalidCacheControl));
    assert_eq!(parse_cache_control(b"foo bar", &mut cc), Err(Reject::InvalidCacheControl));
    assert_eq!(parse_cache_control(b"x=\"open", &mut cc), Err(Reject::InvalidCacheControl));

    let mut cc = CacheControl::default();
    parse_pragma(b"no-cache", &mut cc).unwrap();
    assert!(cc.pragma_no_cache());
    assert!(!cc.no_cache());
}

#[test]
fn test_keep_alive() {
    let mut ka = KeepAlive::default();
    parse_keep_alive(b"timeout=5, max=100, foo=bar", &mut ka).unwrap();
    assert_eq!(ka.timeout, Some(5));
    assert_eq!(ka.max, Some(100));
    assert_eq!(parse_keep_alive(b"timeout=x", &mut ka), Err(Reject::InvalidKeepAlive));
    assert_eq!(parse_keep_alive(b"timeout", &mut ka), Err(Reject::InvalidKeepAlive));
}

#[test]
fn test_etag() {
    assert_eq!(parse_etag(b"\"abc\""), Ok((false, 1..4)));
    assert_eq!(parse_etag(b"W/\"abc\""), Ok((true, 3..6)));
    assert_eq!(parse_etag(b"\"\""), Ok((false, 1..1)));

    macro_rules! test {
        ($($input:literal),*) => {
            $(assert_eq!(parse_etag($input), Err(Reject::InvalidETag), "{:?}", $input.escape_ascii().to_string());)*
        };
    }

    test!(
        b"abc\"",
        b"\"abc",
        b"abc",
        b"*",
        b"",
        b"W/  \"abc\"",
        b"w/\"abc\"",
        b"\"a\", \"b\"",
        b"\"a\"b\""
    );
}

#[test]
fn test_if_none_match() {
    assert_eq!(parse_if_none_match(b"*"), Ok(None));
    assert_eq!(parse_if_none_match(b"\"a\""), Ok(Some(vec![(false, 1..2)])));
    assert_eq!(
        parse_if_none_match(b"\"xyz\", W/\"a\" ,\"\""),
        Ok(Some(vec![(false, 1..4), (true, 10..11), (false, 15..15)]))
    );

    macro_rules! test {
        ($($input:literal),*) => {
            $(assert_eq!(parse_if_none_match($input), Err(Reject::InvalidIfNoneMatch), "{:?}", $input.escape_ascii().to_string());)*
        };
    }

    test!(
        b"",
        b"\"a\",",
        b"\"a\" \"b\"",
        b"*, \"a\"",
        b"\"a\", *",
        b"**",
        b"\"a",
        b"a\""
    );
}

#[test]
fn test_cookies() {
    let bytes = b"a=1; b=\"x y\"; c=";
    assert!(parse_cookies(bytes).is_err());

    let bytes = b"a=1; b=\"xy\"; c=";
    let pairs = parse_cookies(bytes).unwrap();
    let pairs: Vec<_> = pairs.into_iter().map(|(n, v)| (&bytes[n], &bytes[v])).collect();
    assert_eq!(
        pairs,
        [
            (&b"a"[..], &b"1"[..]),
            (&b"b"[..], &b"\"xy\""[..]),
            (&b"c"[..], &b""[..])
        ]
    );

    macro_rules! test {
        ($($input:literal),*) => {
            $(assert_eq!(parse_cookies($input), Err(Reject::InvalidCookie), "{:?}", $input.escape_ascii().to_string());)*
        };
    }

    test!(
        b"",
        b"a=1;b=2",
        b"a=1 b=2",
        b"a=1\tb=2",
        b"a=1, b=2",
        b"a=1;  b=2",
        b"a=1; ",
        b"=1",
        b"a"
    );
}

#[test]
fn test_forwarded_for() {
    assert_eq!(parse_forwarded_for(b"1.2.3.4"), Ok(1));
    assert_eq!(
        parse_forwarded_for(b"1.2.3.4:8080, [::1]:443 ,example.com, ::ffff:1.2.3.4"),
        Ok(4)
    );
    assert_eq!(parse_forwarded_for(b"my_host-1"), Ok(1));

    macro_rules! test {
        ($($input:literal),*) => {
            $(assert_eq!(parse_forwarded_for($input), Err(Reject::InvalidForwardedFor), "{:?}", $input.escape_ascii().to_string());)*
        };
    }

    test!(
        b"",
        b"1.2.3.4,,5.6.7.8",
        b"1.2.3.4,",
        b"foo!",
        b"1.2.3.4:70000",
        b"1.2.3.4:",
        b"[::1",
        b"[]",
        b"a b"
    );
}

#[test]
fn test_accept() {
    assert_eq!(accepts_html(b"text/html"), Ok(true));
    assert_eq!(accepts_html(b"text/plain, TEXT/HTML;level=1"), Ok(true));
    assert_eq!(accepts_html(b"text/*"), Ok(false));
    assert_eq!(accepts_html(b"*/*"), Ok(false));
    assert_eq!(accepts_html(b"*/*, text/html"), Ok(true));
    assert_eq!(accepts_html(b"text/html;q=0"), Ok(false));
    assert_eq!(accepts_html(b"text/html; q=0.000"), Ok(false));
    assert_eq!(accepts_html(b"text/html; q=0.5"), Ok(true));
    assert_eq!(accepts_html(b"text/html;q=1.0"), Ok(true));
    assert_eq!(accepts_html(b""), Ok(false));

    assert_eq!(accepts_html(b"text"), Err(Reject::InvalidAccept));
    assert_eq!(accepts_html(b"text/html;q=2"), Err(Reject::InvalidAccept));
    assert_eq!(accepts_html(b"text/html;q=0.1234"), Err(Reject::InvalidAccept));
    assert_eq!(accepts_html(b"/html"), Err(Reject::InvalidAccept));
}

#[test]
fn test_uri() {
    assert_eq!(parse_target(b"/index.html?a=1"), Some(Target::Origin));
    assert_eq!(parse_target(b"*"), Some(Target::Asterisk));
    assert_eq!(
        parse_target(b"http://example.com:8080/path"),
        Some(Target::Absolute {
            authority: Authority { host: 7..18, port: Some(8080) },
            path: 23..28,
        })
    );
    assert_eq!(
        parse_target(b"http://example.com"),
        Some(Target::Absolute {
            authority: Authority { host: 7..18, port: None },
            path: 18..18,
        })
    );
    assert_eq!(
        parse_target(b"https://[::1]:443/"),
        Some(Target::Absolute {
            authority: Authority { host: 8..13, port: Some(443) },
            path: 17..18,
        })
    );
    assert_eq!(
        parse_target(b"example.com:443"),
        Some(Target::Authority(Authority { host: 0..11, port: Some(443) }))
    );
    assert_eq!(parse_target(b""), None);
    assert_eq!(parse_target(b"http://"), None);
    assert_eq!(parse_target(b"http://user@host/"), None);
    assert_eq!(parse_target(b"http://host:99999/"), None);

    assert_eq!(parse_referer(b"/foo"), Some(Target::Origin));
    assert!(matches!(
        parse_referer(b"http://[fe80::1]/a"),
        Some(Target::Absolute { .. })
    ));
    assert_eq!(parse_referer(b"foo"), None);
    assert_eq!(parse_referer(b"http://a b/"), None);

    assert_eq!(parse_host(b""), Some(None));
    assert_eq!(
        parse_host(b"example.com:80"),
        Some(Some(Authority { host: 0..11, port: Some(80) }))
    );
    assert_eq!(parse_host(b"exa mple.com"), None);
}
