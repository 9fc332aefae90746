/// HTTP [Status Code][rfc].
///
/// Any three digit code in `100..=599` is accepted, reason phrases are not interpreted.
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(u16);

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

impl StatusCode {
    /// `200 OK`
    pub const OK: Self = Self(200);
    /// `204 No Content`
    pub const NO_CONTENT: Self = Self(204);
    /// `304 Not Modified`
    pub const NOT_MODIFIED: Self = Self(304);

    /// Create status code, returns `None` if `code` is outside `100..=599`.
    #[inline]
    pub const fn new(code: u16) -> Option<Self> {
        match code {
            100..=599 => Some(Self(code)),
            _ => None,
        }
    }

    /// Parse exactly three ASCII digits.
    pub const fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [a @ b'0'..=b'9', b @ b'0'..=b'9', c @ b'0'..=b'9'] => Self::new(
                (*a - b'0') as u16 * 100 + (*b - b'0') as u16 * 10 + (*c - b'0') as u16,
            ),
            _ => None,
        }
    }

    /// Returns status code value, e.g: `200`.
    #[inline]
    pub const fn status(&self) -> u16 {
        self.0
    }

    /// Returns `true` for `1xx` status.
    #[inline]
    pub const fn is_informational(&self) -> bool {
        self.0 < 200
    }

    /// Returns `true` if a response with this status never carries content.
    ///
    /// This is the case for `1xx`, `204` and `304`.
    #[inline]
    pub const fn is_bodiless(&self) -> bool {
        self.is_informational() || self.0 == 204 || self.0 == 304
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
