/// Parse an [HTTP-date][rfc] into seconds since the Unix epoch.
///
/// The preferred IMF-fixdate and the obsolete RFC 850 and asctime formats are accepted. A
/// single digit day of month is tolerated in every format.
///
/// ```
/// use strait::http::parse_httpdate;
///
/// assert_eq!(parse_httpdate(b"Sun, 06 Nov 1994 08:49:37 GMT"), Some(784111777));
/// assert_eq!(parse_httpdate(b"Sunday, 06-Nov-94 08:49:37 GMT"), Some(784111777));
/// assert_eq!(parse_httpdate(b"Sun Nov  6 08:49:37 1994"), Some(784111777));
/// ```
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#section-5.6.7>
pub fn parse_httpdate(bytes: &[u8]) -> Option<u64> {
    let mut cursor = Cursor { bytes };

    let wday = cursor.alpha();
    let date = match cursor.next()? {
        b',' => {
            cursor.expect(b' ')?;
            let day = cursor.digits(1, 2)?;
            match cursor.next()? {
                // IMF-fixdate: Sun, 06 Nov 1994 08:49:37 GMT
                b' ' => {
                    if !SHORT_DAYS.iter().any(|d| *d == wday) {
                        return None;
                    }
                    let month = cursor.month()?;
                    cursor.expect(b' ')?;
                    let year = cursor.digits(4, 4)?;
                    cursor.expect(b' ')?;
                    let time = cursor.time()?;
                    cursor.literal(b" GMT")?;
                    (year, month, day, time)
                }
                // RFC 850: Sunday, 06-Nov-94 08:49:37 GMT
                b'-' => {
                    if !LONG_DAYS.iter().any(|d| *d == wday) {
                        return None;
                    }
                    let month = cursor.month()?;
                    cursor.expect(b'-')?;
                    let year = match cursor.digits(2, 2)? {
                        y @ 0..70 => 2000 + y,
                        y => 1900 + y,
                    };
                    cursor.expect(b' ')?;
                    let time = cursor.time()?;
                    cursor.literal(b" GMT")?;
                    (year, month, day, time)
                }
                _ => return None,
            }
        }
        // asctime: Sun Nov  6 08:49:37 1994
        b' ' => {
            if !SHORT_DAYS.iter().any(|d| *d == wday) {
                return None;
            }
            let month = cursor.month()?;
            cursor.expect(b' ')?;
            if cursor.peek() == Some(b' ') {
                cursor.next();
            }
            let day = cursor.digits(1, 2)?;
            cursor.expect(b' ')?;
            let time = cursor.time()?;
            cursor.expect(b' ')?;
            let year = cursor.digits(4, 4)?;
            (year, month, day, time)
        }
        _ => return None,
    };

    if !cursor.bytes.is_empty() {
        return None;
    }

    let (year, month, day, (hour, min, sec)) = date;
    if year < 1970 || day == 0 || day > days_in_month(year, month) {
        return None;
    }

    let days = days_from_civil(year, month, day);
    Some(days * 86400 + hour as u64 * 3600 + min as u64 * 60 + sec as u64)
}

const SHORT_DAYS: [&[u8]; 7] = [b"Mon", b"Tue", b"Wed", b"Thu", b"Fri", b"Sat", b"Sun"];

const LONG_DAYS: [&[u8]; 7] = [
    b"Monday", b"Tuesday", b"Wednesday", b"Thursday", b"Friday", b"Saturday", b"Sunday",
];

const MONTHS: [&[u8; 3]; 12] = [
    b"Jan", b"Feb", b"Mar", b"Apr", b"May", b"Jun", b"Jul", b"Aug", b"Sep", b"Oct", b"Nov",
    b"Dec",
];

struct Cursor<'a> {
    bytes: &'a [u8],
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    fn next(&mut self) -> Option<u8> {
        let (first, rest) = self.bytes.split_first()?;
        self.bytes = rest;
        Some(*first)
    }

    fn expect(&mut self, byte: u8) -> Option<()> {
        (self.next()? == byte).then_some(())
    }

    fn literal(&mut self, lit: &[u8]) -> Option<()> {
        self.bytes = self.bytes.strip_prefix(lit)?;
        Some(())
    }

    fn alpha(&mut self) -> &'a [u8] {
        let len = self.bytes.iter().take_while(|b| b.is_ascii_alphabetic()).count();
        let (alpha, rest) = self.bytes.split_at(len);
        self.bytes = rest;
        alpha
    }

    fn digits(&mut self, min: usize, max: usize) -> Option<u32> {
        let len = self
            .bytes
            .iter()
            .take(max)
            .take_while(|b| b.is_ascii_digit())
            .count();
        if len < min {
            return None;
        }
        let (digits, rest) = self.bytes.split_at(len);
        self.bytes = rest;
        Some(digits.iter().fold(0, |acc, b| acc * 10 + (b - b'0') as u32))
    }

    fn month(&mut self) -> Option<u32> {
        let name = self.bytes.get(..3)?;
        let month = MONTHS.iter().position(|m| m[..] == *name)?;
        self.bytes = &self.bytes[3..];
        Some(month as u32 + 1)
    }

    /// `HH:MM:SS`
    fn time(&mut self) -> Option<(u32, u32, u32)> {
        let hour = self.digits(2, 2)?;
        self.expect(b':')?;
        let min = self.digits(2, 2)?;
        self.expect(b':')?;
        let sec = self.digits(2, 2)?;
        // leap second is allowed
        (hour < 24 && min < 60 && sec <= 60).then_some((hour, min, sec))
    }
}

const fn is_leap(year: u32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

const fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if is_leap(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Days since 1970-01-01 of a proleptic Gregorian date, `year >= 1970`.
const fn days_from_civil(year: u32, month: u32, day: u32) -> u64 {
    // shift the year to start on March so the leap day is the last day of the year
    let year = (if month <= 2 { year - 1 } else { year }) as u64;
    let era = year / 400;
    let yoe = year - era * 400;
    let mp = (month as u64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as u64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}
