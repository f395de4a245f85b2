use std::time::Duration;

const MAX_FRACTION_DIGITS: usize = 9;

/// Parse a proto3 JSON duration such as `"1s"`, `"0.25s"` or
/// `"3.000000001s"`.
///
/// Seconds are decimal digits, optionally followed by `.` and one to nine
/// fractional digits, then a mandatory `s`. Signs, exponents and whitespace
/// are rejected; call timeouts cannot be negative.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let body = s.strip_suffix('s')?;
    let (secs, frac) = match body.split_once('.') {
        Some((secs, frac)) => (secs, Some(frac)),
        None => (body, None),
    };

    if secs.is_empty() || !secs.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let secs: u64 = secs.parse().ok()?;

    let nanos = match frac {
        None => 0,
        Some(frac) => {
            if frac.is_empty()
                || frac.len() > MAX_FRACTION_DIGITS
                || !frac.bytes().all(|b| b.is_ascii_digit())
            {
                return None;
            }
            // right-pad to nanoseconds
            let scale = 10u32.pow((MAX_FRACTION_DIGITS - frac.len()) as u32);
            frac.parse::<u32>().ok()? * scale
        }
    };

    Some(Duration::new(secs, nanos))
}
