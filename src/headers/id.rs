/// Message direction.
///
/// Some header names are only recognized in one direction, the same name in the other
/// direction is stored as a raw header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Request,
    Response,
}

struct Props {
    name: &'static str,
    repeatable: bool,
    protected: bool,
    request: bool,
    response: bool,
}

/// Longest well-known header name, `transfer-encoding`.
const MAX_NAME_LEN: usize = 17;

standard_header! {
    /// Well-known header with a dedicated slot in the [`HeaderTable`][super::HeaderTable].
    pub enum HeaderId;

    /// `Host`, target authority of a request.
    Host = b"host", "Host", request;
    /// `Connection`, connection options and hop-by-hop header names.
    Connection = b"connection", "Connection", both, repeatable;
    /// `Content-Length`, fixed body length.
    ContentLength = b"content-length", "Content-Length", both;
    /// `Content-Type`
    ContentType = b"content-type", "Content-Type", both;
    /// `Transfer-Encoding`, transfer codings applied to the body.
    TransferEncoding = b"transfer-encoding", "Transfer-Encoding", both, repeatable;
    /// `Cache-Control`
    CacheControl = b"cache-control", "Cache-Control", both, repeatable;
    /// `Pragma`
    Pragma = b"pragma", "Pragma", both, repeatable;
    /// `Cookie`
    Cookie = b"cookie", "Cookie", request;
    /// `Referer`
    Referer = b"referer", "Referer", request;
    /// `ETag`
    ETag = b"etag", "ETag", response;
    /// `If-None-Match`
    IfNoneMatch = b"if-none-match", "If-None-Match", request;
    /// `X-Forwarded-For`
    XForwardedFor = b"x-forwarded-for", "X-Forwarded-For", request, repeatable;
    /// `User-Agent`
    UserAgent = b"user-agent", "User-Agent", request;
    /// `Server`
    Server = b"server", "Server", response;
    /// `Date`
    Date = b"date", "Date", both;
    /// `Expires`
    Expires = b"expires", "Expires", response;
    /// `Age`
    Age = b"age", "Age", response;
    /// `Keep-Alive`, parameters of a persistent connection.
    ///
    /// This is the only well-known header that a `Connection` header may name.
    KeepAlive = b"keep-alive", "Keep-Alive", both, repeatable, unprotected;
    /// `Accept`
    Accept = b"accept", "Accept", request, repeatable;
}

/// Raw header names that are never hop-by-hop.
const PROTECTED_RAW: [&[u8]; 2] = [b"authorization", b"set-cookie"];

impl HeaderId {
    /// Returns the canonical header name.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        PROPS[*self as usize].name
    }

    /// Returns `true` if the header may appear more than once, values are chained.
    #[inline]
    pub const fn is_repeatable(&self) -> bool {
        PROPS[*self as usize].repeatable
    }

    /// Returns `true` if a `Connection` header may not name this header.
    #[inline]
    pub const fn is_protected(&self) -> bool {
        PROPS[*self as usize].protected
    }

    /// Returns `true` if this header is recognized in the given direction.
    #[inline]
    pub const fn applies_to(&self, direction: Direction) -> bool {
        match direction {
            Direction::Request => PROPS[*self as usize].request,
            Direction::Response => PROPS[*self as usize].response,
        }
    }

    /// Resolve a header name, compared case insensitively.
    ///
    /// Returns `None` for names outside the well-known set or not recognized in `direction`.
    pub fn lookup(name: &[u8], direction: Direction) -> Option<HeaderId> {
        if name.len() > MAX_NAME_LEN {
            return None;
        }
        let mut lower = [0u8; MAX_NAME_LEN];
        let lower = &mut lower[..name.len()];
        lower.copy_from_slice(name);
        lower.make_ascii_lowercase();

        let id = Self::from_lowercase(lower)?;
        id.applies_to(direction).then_some(id)
    }
}

/// Returns `true` if a `Connection` header may not name the header called `name`.
///
/// Covers well-known headers in either direction and a fixed set of end-to-end raw names.
pub fn is_protected_name(name: &[u8]) -> bool {
    let known = HeaderId::lookup(name, Direction::Request)
        .or_else(|| HeaderId::lookup(name, Direction::Response));
    match known {
        Some(id) => id.is_protected(),
        None => PROTECTED_RAW.iter().any(|raw| raw.eq_ignore_ascii_case(name)),
    }
}

impl std::fmt::Display for HeaderId {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Macros =====

macro_rules! standard_header {
    (@DIR request) => { (true, false) };
    (@DIR response) => { (false, true) };
    (@DIR both) => { (true, true) };

    (@REPEAT) => { false };
    (@REPEAT repeatable $($rest:ident)*) => { true };
    (@REPEAT $other:ident $($rest:ident)*) => { standard_header!(@REPEAT $($rest)*) };

    (@PROTECT) => { true };
    (@PROTECT unprotected $($rest:ident)*) => { false };
    (@PROTECT $other:ident $($rest:ident)*) => { standard_header!(@PROTECT $($rest)*) };

    (
        $(#[$enum_doc:meta])*
        pub enum $enum:ident;

        $(
            $(#[$doc:meta])*
            $id:ident = $lower:literal, $name:literal, $dir:ident $(, $flag:ident)*;
        )*
    ) => {
        $(#[$enum_doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        pub enum $enum {
            $(
                $(#[$doc])*
                $id,
            )*
        }

        impl $enum {
            /// All well-known headers in slot order.
            pub const ALL: &'static [$enum] = &[$($enum::$id,)*];

            /// Number of well-known headers.
            pub const COUNT: usize = Self::ALL.len();

            fn from_lowercase(name: &[u8]) -> Option<$enum> {
                match name {
                    $(
                        $lower => Some($enum::$id),
                    )*
                    _ => None,
                }
            }
        }

        static PROPS: [Props; $enum::COUNT] = [
            $(
                Props {
                    name: $name,
                    repeatable: standard_header!(@REPEAT $($flag)*),
                    protected: standard_header!(@PROTECT $($flag)*),
                    request: standard_header!(@DIR $dir).0,
                    response: standard_header!(@DIR $dir).1,
                },
            )*
        ];
    };
}

use standard_header;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(HeaderId::lookup(b"HOST", Direction::Request), Some(HeaderId::Host));
        assert_eq!(HeaderId::lookup(b"host", Direction::Response), None);
        assert_eq!(
            HeaderId::lookup(b"X-Forwarded-For", Direction::Request),
            Some(HeaderId::XForwardedFor)
        );
        assert_eq!(
            HeaderId::lookup(b"Transfer-encoding", Direction::Response),
            Some(HeaderId::TransferEncoding)
        );
        assert_eq!(HeaderId::lookup(b"ETag", Direction::Response), Some(HeaderId::ETag));
        assert_eq!(HeaderId::lookup(b"ETag", Direction::Request), None);
        assert_eq!(HeaderId::lookup(b"X-Custom", Direction::Request), None);
        assert_eq!(HeaderId::lookup(b"X-Forwarded-For-Too-Long", Direction::Request), None);
        assert_eq!(HeaderId::COUNT, 19);
        assert_eq!(HeaderId::ALL[HeaderId::Accept as usize], HeaderId::Accept);
    }

    #[test]
    fn test_protected() {
        assert!(is_protected_name(b"Host"));
        assert!(is_protected_name(b"content-length"));
        assert!(is_protected_name(b"Server"));
        assert!(is_protected_name(b"Authorization"));
        assert!(!is_protected_name(b"Keep-Alive"));
        assert!(!is_protected_name(b"X-Custom"));
        assert!(!HeaderId::KeepAlive.is_protected());
        assert!(HeaderId::Connection.is_protected());
    }

    #[test]
    fn test_flags() {
        assert!(!HeaderId::Host.is_repeatable());
        assert!(HeaderId::Host.is_protected());
        assert!(HeaderId::Connection.is_repeatable());
        assert!(HeaderId::Connection.is_protected());
        assert!(HeaderId::KeepAlive.is_repeatable());
        assert!(!HeaderId::KeepAlive.is_protected());
        assert!(!HeaderId::ContentLength.is_repeatable());
        assert!(HeaderId::Host.applies_to(Direction::Request));
        assert!(!HeaderId::Host.applies_to(Direction::Response));
        assert!(HeaderId::Date.applies_to(Direction::Response));
    }
}
