use core::fmt::Write as _;

use heapless::{String, Vec};

use crate::{Error, HttpResult};

/// The full response (status line, headers and page body) fits here with
/// room to spare.
pub const RESPONSE_BUFFER_SIZE: usize = 512;

const STATUS_LINE: &str = "HTTP/1.1 200 OK";
// The original firmware writes the header name without a space after the
// colon; kept byte-for-byte for clients expecting that shape.
const CONTENT_TYPE_LINE: &str = "Content-type:text/html";
const CONNECTION_LINE: &str = "Connection: close";

const BODY_HEAD: [&str; 4] = [
    "<!DOCTYPE html><html>",
    "<head><title>ESP32 LED Control</title></head>",
    "<body>",
    "<h1>ESP32 LED Control</h1>",
];
const BODY_TAIL: [&str; 3] = [
    "<p><a href=\"/LED_ON\">Turn ON</a></p>",
    "<p><a href=\"/LED_OFF\">Turn OFF</a></p>",
    "</body></html>",
];

/// State token embedded in the page body.
fn state_token(led_on: bool) -> &'static str {
    if led_on { "ON" } else { "OFF" }
}

/// Render the complete response for the given LED state.
///
/// Every line is CRLF-terminated, in the exact order the original firmware
/// produced them: status line, two headers, blank line, then the page body.
pub fn render(led_on: bool) -> HttpResult<Vec<u8, RESPONSE_BUFFER_SIZE>> {
    let mut out = Vec::new();

    push_line(&mut out, STATUS_LINE)?;
    push_line(&mut out, CONTENT_TYPE_LINE)?;
    push_line(&mut out, CONNECTION_LINE)?;
    push_line(&mut out, "")?;

    for line in BODY_HEAD {
        push_line(&mut out, line)?;
    }

    let mut state_line = String::<64>::new();
    write!(state_line, "<p>LED is currently {}</p>", state_token(led_on))?;
    push_line(&mut out, &state_line)?;

    for line in BODY_TAIL {
        push_line(&mut out, line)?;
    }

    Ok(out)
}

fn push_line(out: &mut Vec<u8, RESPONSE_BUFFER_SIZE>, line: &str) -> HttpResult<()> {
    out.extend_from_slice(line.as_bytes())
        .map_err(|()| Error::ResponseOverflow)?;
    out.extend_from_slice(b"\r\n")
        .map_err(|()| Error::ResponseOverflow)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_response(state: &str) -> std::string::String {
        let mut expected = std::string::String::new();
        for line in [
            "HTTP/1.1 200 OK",
            "Content-type:text/html",
            "Connection: close",
            "",
            "<!DOCTYPE html><html>",
            "<head><title>ESP32 LED Control</title></head>",
            "<body>",
            "<h1>ESP32 LED Control</h1>",
            &std::format!("<p>LED is currently {state}</p>"),
            "<p><a href=\"/LED_ON\">Turn ON</a></p>",
            "<p><a href=\"/LED_OFF\">Turn OFF</a></p>",
            "</body></html>",
        ] {
            expected.push_str(line);
            expected.push_str("\r\n");
        }
        expected
    }

    #[test]
    fn renders_exact_bytes_for_on() {
        let rendered = render(true).unwrap();
        assert_eq!(rendered.as_slice(), expected_response("ON").as_bytes());
    }

    #[test]
    fn renders_exact_bytes_for_off() {
        let rendered = render(false).unwrap();
        assert_eq!(rendered.as_slice(), expected_response("OFF").as_bytes());
    }

    #[test]
    fn state_token_is_byte_exact() {
        let on = render(true).unwrap();
        let off = render(false).unwrap();
        assert!(
            std::str::from_utf8(&on)
                .unwrap()
                .contains("<p>LED is currently ON</p>\r\n")
        );
        assert!(
            std::str::from_utf8(&off)
                .unwrap()
                .contains("<p>LED is currently OFF</p>\r\n")
        );
    }
}
