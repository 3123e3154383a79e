/// HTTP request methods understood by the parser.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl Method {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "PATCH" => Method::Patch,
            "OPTIONS" => Method::Options,
            "HEAD" => Method::Head,
            _ => return None,
        })
    }
}

/// Parsed request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLine<'a> {
    pub method: Method,
    pub path: &'a str,
}

/// Parse a request line such as `"GET /LED_ON HTTP/1.1"`.
///
/// The protocol version is not inspected beyond requiring that method and
/// path are present.
pub fn parse_request_line(line: &str) -> Option<RequestLine<'_>> {
    let mut parts = line.split_whitespace();
    let method = parts.next().and_then(Method::parse)?;
    let path = parts.next()?;

    Some(RequestLine { method, path })
}

/// Routes the server recognizes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route {
    LedOn,
    LedOff,
}

impl Route {
    /// Match a parsed request line against the route table.
    ///
    /// Paths are compared exactly and case-sensitively; only `GET` matches.
    pub fn matching(request: &RequestLine<'_>) -> Option<Self> {
        if request.method != Method::Get {
            return None;
        }
        match request.path {
            "/LED_ON" => Some(Route::LedOn),
            "/LED_OFF" => Some(Route::LedOff),
            _ => None,
        }
    }

    /// Whether this route turns the LED on.
    pub fn led_on(self) -> bool {
        matches!(self, Route::LedOn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_method_and_path() {
        let request = parse_request_line("GET /LED_ON HTTP/1.1").unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/LED_ON");
    }

    #[test]
    fn rejects_unknown_method_and_missing_path() {
        assert_eq!(parse_request_line("BREW /pot HTTP/1.1"), None);
        assert_eq!(parse_request_line("GET"), None);
        assert_eq!(parse_request_line(""), None);
    }

    #[test]
    fn matches_the_two_led_routes() {
        let on = parse_request_line("GET /LED_ON HTTP/1.1").unwrap();
        let off = parse_request_line("GET /LED_OFF HTTP/1.1").unwrap();
        assert_eq!(Route::matching(&on), Some(Route::LedOn));
        assert_eq!(Route::matching(&off), Some(Route::LedOff));
        assert!(Route::matching(&on).unwrap().led_on());
        assert!(!Route::matching(&off).unwrap().led_on());
    }

    #[test]
    fn unrecognized_paths_do_not_match() {
        for line in [
            "GET /favicon.ico HTTP/1.1",
            "GET /led_on HTTP/1.1",
            "GET /LED_ON/extra HTTP/1.1",
            "POST /LED_ON HTTP/1.1",
        ] {
            let request = parse_request_line(line).unwrap();
            assert_eq!(Route::matching(&request), None, "{line}");
        }
    }
}
