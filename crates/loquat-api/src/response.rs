/// Raw result of one request: status code plus the full body.
///
/// The transport never interprets the status; callers decide what counts
/// as success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ResponseEnvelope {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The device signals success with exactly `200 OK`.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_200_is_ok() {
        assert!(ResponseEnvelope::new(200, "{}").is_ok());
        assert!(!ResponseEnvelope::new(201, "{}").is_ok());
        assert!(!ResponseEnvelope::new(204, "").is_ok());
        assert!(!ResponseEnvelope::new(404, "").is_ok());
    }

    #[test]
    fn text_is_lossy() {
        let env = ResponseEnvelope::new(200, vec![b'o', b'k', 0xff]);
        assert_eq!(env.text(), "ok\u{fffd}");
    }
}
