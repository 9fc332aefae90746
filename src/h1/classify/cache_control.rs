use super::{Elements, parameter, unquote};
use crate::h1::Reject;

/// Cache directives from `Cache-Control` and `Pragma`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheControl {
    flags: u16,
    max_age: Option<u32>,
    s_maxage: Option<u32>,
    min_fresh: Option<u32>,
    max_stale: Option<u32>,
}

macro_rules! directives {
    ($($(#[$doc:meta])* $flag:ident, $get:ident = $bit:literal;)*) => {
        impl CacheControl {
            $(const $flag: u16 = 1 << $bit;)*

            $(
                $(#[$doc])*
                #[inline]
                pub const fn $get(&self) -> bool {
                    self.flags & Self::$flag != 0
                }
            )*
        }
    };
}

directives! {
    /// `no-store`
    NO_STORE, no_store = 0;
    /// `no-cache`
    NO_CACHE, no_cache = 1;
    /// `private`
    PRIVATE, private = 2;
    /// `public`
    PUBLIC, public = 3;
    /// `no-transform`
    NO_TRANSFORM, no_transform = 4;
    /// `must-revalidate`
    MUST_REVALIDATE, must_revalidate = 5;
    /// `proxy-revalidate`
    PROXY_REVALIDATE, proxy_revalidate = 6;
    /// `only-if-cached`
    ONLY_IF_CACHED, only_if_cached = 7;
    /// `max-stale`, with or without a limit.
    MAX_STALE, has_max_stale = 8;
    /// `Pragma: no-cache`
    PRAGMA_NO_CACHE, pragma_no_cache = 9;
}

impl CacheControl {
    /// `max-age=N`
    #[inline]
    pub const fn max_age(&self) -> Option<u32> {
        self.max_age
    }

    /// `s-maxage=N`
    #[inline]
    pub const fn s_maxage(&self) -> Option<u32> {
        self.s_maxage
    }

    /// `min-fresh=N`
    #[inline]
    pub const fn min_fresh(&self) -> Option<u32> {
        self.min_fresh
    }

    /// `max-stale=N`, `None` if absent or given without a limit.
    #[inline]
    pub const fn max_stale(&self) -> Option<u32> {
        self.max_stale
    }
}

/// Parse delta-seconds, saturating at `u32::MAX`.
///
/// delta-seconds = 1*DIGIT
pub(crate) fn delta_seconds(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(bytes.iter().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add((b - b'0') as u32)
    }))
}

/// Parse one `Cache-Control` line into `cc`.
///
/// Unknown directives are ignored, but each directive must still be well formed.
///
/// Cache-Control   = #cache-directive
/// cache-directive = token [ "=" ( token / quoted-string ) ]
pub(crate) fn parse_cache_control(bytes: &[u8], cc: &mut CacheControl) -> Result<(), Reject> {
    for range in Elements::new(bytes) {
        if range.is_empty() {
            continue;
        }
        let (name, value) = parameter(&bytes[range]).ok_or(Reject::InvalidCacheControl)?;
        let seconds = || {
            value
                .map(unquote)
                .and_then(delta_seconds)
                .ok_or(Reject::InvalidCacheControl)
        };

        macro_rules! is {
            ($lit:literal) => {
                name.eq_ignore_ascii_case($lit)
            };
        }

        if is!(b"no-store") {
            cc.flags |= CacheControl::NO_STORE;
        } else if is!(b"no-cache") {
            cc.flags |= CacheControl::NO_CACHE;
        } else if is!(b"private") {
            cc.flags |= CacheControl::PRIVATE;
        } else if is!(b"public") {
            cc.flags |= CacheControl::PUBLIC;
        } else if is!(b"no-transform") {
            cc.flags |= CacheControl::NO_TRANSFORM;
        } else if is!(b"must-revalidate") {
            cc.flags |= CacheControl::MUST_REVALIDATE;
        } else if is!(b"proxy-revalidate") {
            cc.flags |= CacheControl::PROXY_REVALIDATE;
        } else if is!(b"only-if-cached") {
            cc.flags |= CacheControl::ONLY_IF_CACHED;
        } else if is!(b"max-age") {
            cc.max_age = Some(seconds()?);
        } else if is!(b"s-maxage") {
            cc.s_maxage = Some(seconds()?);
        } else if is!(b"min-fresh") {
            cc.min_fresh = Some(seconds()?);
        } else if is!(b"max-stale") {
            cc.flags |= CacheControl::MAX_STALE;
            if value.is_some() {
                cc.max_stale = Some(seconds()?);
            }
        }
    }
    Ok(())
}

/// Parse one `Pragma` line into `cc`.
///
/// Pragma = #pragma-directive
pub(crate) fn parse_pragma(bytes: &[u8], cc: &mut CacheControl) -> Result<(), Reject> {
    for range in Elements::new(bytes) {
        if range.is_empty() {
            continue;
        }
        let (name, value) = parameter(&bytes[range]).ok_or(Reject::InvalidCacheControl)?;
        if value.is_none() && name.eq_ignore_ascii_case(b"no-cache") {
            cc.flags |= CacheControl::PRAGMA_NO_CACHE;
        }
    }
    Ok(())
}
