//! Typed access to the `x-my-header` request header.

use axum::http::{HeaderName, HeaderValue};
use axum_extra::headers::{self, Header};

pub static X_MY_HEADER: HeaderName = HeaderName::from_static("x-my-header");

/// Value of the first `x-my-header` occurrence on a request.
///
/// Decoding never rejects a present header. Each byte maps to the latin-1
/// character of the same code point, so distinct header bytes always yield
/// distinct strings and an empty value stays empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyHeader(pub String);

impl MyHeader {
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Header for MyHeader {
    fn name() -> &'static HeaderName {
        &X_MY_HEADER
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        values
            .next()
            .map(|value| Self(decode_latin1(value.as_bytes())))
            .ok_or_else(headers::Error::invalid)
    }

    fn encode<E>(&self, values: &mut E)
    where
        E: Extend<HeaderValue>,
    {
        let value = encode_latin1(&self.0).and_then(|bytes| HeaderValue::from_bytes(&bytes).ok());
        values.extend(value);
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

// None when a character lies outside latin-1 and has no single-byte form.
fn encode_latin1(value: &str) -> Option<Vec<u8>> {
    value.chars().map(|c| u8::try_from(c).ok()).collect()
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderMap;
    use axum_extra::headers::HeaderMapExt;

    use super::*;

    #[test]
    fn decodes_first_value() {
        let mut map = HeaderMap::new();
        map.append(&X_MY_HEADER, HeaderValue::from_static("first"));
        map.append(&X_MY_HEADER, HeaderValue::from_static("second"));

        let decoded = map.typed_get::<MyHeader>().expect("header present");
        assert_eq!(decoded, MyHeader("first".to_string()));
    }

    #[test]
    fn decodes_empty_value() {
        let mut map = HeaderMap::new();
        map.insert(&X_MY_HEADER, HeaderValue::from_static(""));

        let decoded = map.typed_get::<MyHeader>().expect("header present");
        assert_eq!(decoded.into_inner(), "");
    }

    #[test]
    fn missing_header_is_none() {
        let map = HeaderMap::new();
        assert_eq!(map.typed_get::<MyHeader>(), None);
    }

    #[test]
    fn obs_text_bytes_decode_as_latin1() {
        let mut map = HeaderMap::new();
        map.insert(
            &X_MY_HEADER,
            HeaderValue::from_bytes(b"caf\xe9").expect("obs-text is a valid header value"),
        );

        let decoded = map.typed_get::<MyHeader>().expect("header present");
        assert_eq!(decoded.into_inner(), "caf\u{e9}");
    }

    #[test]
    fn distinct_obs_text_bytes_stay_distinct() {
        let decoded: Vec<String> = [&b"\xe9"[..], &b"\xff"[..], &b"\x80"[..]]
            .into_iter()
            .map(|bytes| {
                let mut map = HeaderMap::new();
                map.insert(
                    &X_MY_HEADER,
                    HeaderValue::from_bytes(bytes).expect("obs-text is a valid header value"),
                );
                map.typed_get::<MyHeader>()
                    .expect("header present")
                    .into_inner()
            })
            .collect();

        assert_eq!(decoded, vec!["\u{e9}", "\u{ff}", "\u{80}"]);
    }

    #[test]
    fn encode_writes_latin1_bytes() {
        let mut map = HeaderMap::new();
        map.typed_insert(MyHeader("caf\u{e9}".to_string()));

        assert_eq!(
            map.get("x-my-header").map(|v| v.as_bytes()),
            Some(&b"caf\xe9"[..])
        );
    }

    #[test]
    fn encode_round_trips_through_header_map() {
        let mut map = HeaderMap::new();
        map.typed_insert(MyHeader("a,b,c".to_string()));

        assert_eq!(map.get("x-my-header").map(|v| v.as_bytes()), Some(&b"a,b,c"[..]));
    }
}
