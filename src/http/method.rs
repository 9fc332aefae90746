/// HTTP Method.
///
/// Methods of [RFC9110], PATCH from [RFC5789], the WebDAV methods of [RFC4918] and the
/// `PURGE` cache invalidation method are recognized. Any other syntactically valid token is
/// [`Method::UNKNOWN`], the raw token is kept by the request.
///
/// [RFC4918]: <https://www.rfc-editor.org/rfc/rfc4918>
/// [RFC5789]: <https://www.rfc-editor.org/rfc/rfc5789>
/// [RFC9110]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-methods>
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Method(u8);

struct Props {
    safe: bool,
    idem: bool,
    name: &'static str,
}

props! {
    static PROPS: [17];

    /// The [GET] method requests transfer of a current selected representation for the target
    /// resource.
    ///
    /// [GET]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-get>
    pub const GET = (0, b"GET", safe, idempotent);
    /// The [HEAD] method is identical to GET except that the response carries no content.
    ///
    /// [HEAD]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-head>
    pub const HEAD = (1, b"HEAD", safe, idempotent);
    /// [POST]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-post>
    pub const POST = (2, b"POST", , );
    /// [PUT]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-put>
    pub const PUT = (3, b"PUT", , idempotent);
    /// [DELETE]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-delete>
    pub const DELETE = (4, b"DELETE", , idempotent);
    /// [OPTIONS]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-options>
    pub const OPTIONS = (5, b"OPTIONS", safe, idempotent);
    /// [TRACE]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-trace>
    pub const TRACE = (6, b"TRACE", safe, idempotent);
    /// [PATCH]: <https://www.rfc-editor.org/rfc/rfc5789#section-2>
    pub const PATCH = (7, b"PATCH", , );
    /// WebDAV [COPY](https://www.rfc-editor.org/rfc/rfc4918#section-9.8).
    pub const COPY = (8, b"COPY", , idempotent);
    /// WebDAV [LOCK](https://www.rfc-editor.org/rfc/rfc4918#section-9.10).
    pub const LOCK = (9, b"LOCK", , );
    /// WebDAV [MKCOL](https://www.rfc-editor.org/rfc/rfc4918#section-9.3).
    pub const MKCOL = (10, b"MKCOL", , idempotent);
    /// WebDAV [MOVE](https://www.rfc-editor.org/rfc/rfc4918#section-9.9).
    pub const MOVE = (11, b"MOVE", , idempotent);
    /// WebDAV [PROPFIND](https://www.rfc-editor.org/rfc/rfc4918#section-9.1).
    pub const PROPFIND = (12, b"PROPFIND", safe, idempotent);
    /// WebDAV [PROPPATCH](https://www.rfc-editor.org/rfc/rfc4918#section-9.2).
    pub const PROPPATCH = (13, b"PROPPATCH", , idempotent);
    /// WebDAV [UNLOCK](https://www.rfc-editor.org/rfc/rfc4918#section-9.11).
    pub const UNLOCK = (14, b"UNLOCK", , idempotent);
    /// Evict the target resource from a cache.
    pub const PURGE = (15, b"PURGE", , idempotent);
}

impl Method {
    /// Syntactically valid method token that is not recognized, including `CONNECT`.
    pub const UNKNOWN: Self = Self(16);

    /// Returns `true` if method is considered ["safe"].
    ///
    /// ["safe"]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-safe-methods>
    #[inline]
    pub const fn is_safe(&self) -> bool {
        PROPS[self.0 as usize].safe
    }

    /// Returns `true` if method is considered ["idempotent"].
    ///
    /// ["idempotent"]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-idempotent-methods>
    #[inline]
    pub const fn is_idempotent(&self) -> bool {
        PROPS[self.0 as usize].idem
    }

    /// Returns `true` if method is [`Method::UNKNOWN`].
    #[inline]
    pub const fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN.0
    }

    /// Returns string representation of the method.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        PROPS[self.0 as usize].name
    }
}

impl std::fmt::Debug for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Macros =====

macro_rules! props {
    (
        static $props:ident: [$len:literal];
        $(
           $(#[$doc:meta])*
           pub const $name:ident = ($idx:literal, $val:literal, $($safe:ident)?, $($idem:ident)?);
        )*
    ) => {
        impl Method {
            $(
               $(#[$doc])*
               pub const $name: Self = Self($idx);
            )*

            /// Resolve a method token.
            ///
            /// Matching is case sensitive, unrecognized tokens are [`Method::UNKNOWN`].
            #[inline]
            pub const fn from_bytes(src: &[u8]) -> Method {
                match src {
                    $(
                        $val => Self::$name,
                    )*
                    _ => Self::UNKNOWN,
                }
            }
        }

        static $props: [Props; $len] = [
            $(
                Props { name: stringify!($name), safe: prop!($($safe)?), idem: prop!($($idem)?) },
            )*
            Props { name: "UNKNOWN", safe: false, idem: false },
        ];
    };
}

macro_rules! prop {
    (safe) => { true };
    (idempotent) => { true };
    () => { false };
}

use {props, prop};

#[cfg(test)]
mod test {
    use super::Method;

    #[test]
    fn test_method() {
        assert_eq!(Method::from_bytes(b"GET"), Method::GET);
        assert_eq!(Method::from_bytes(b"PROPPATCH"), Method::PROPPATCH);
        assert_eq!(Method::from_bytes(b"PURGE").as_str(), "PURGE");
        assert_eq!(Method::from_bytes(b"get"), Method::UNKNOWN);
        assert_eq!(Method::from_bytes(b"CONNECT"), Method::UNKNOWN);
        assert!(Method::UNKNOWN.is_unknown());
        assert!(Method::HEAD.is_safe());
        assert!(!Method::POST.is_idempotent());
        assert!(Method::PUT.is_idempotent());
        assert!(!Method::PUT.is_safe());
    }
}
