/// Composed email models
use bytes::Bytes;

/// One attachment, named after its object key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentDescriptor {
    pub filename: String,
    pub content: Bytes,
}

/// A fully composed message, ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub from: String,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub subject: String,
    pub html_body: String,
    pub attachments: Vec<AttachmentDescriptor>,
}

impl Envelope {
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_attachments() {
        let envelope = Envelope {
            from: "sender@example.com".to_string(),
            to: vec!["a@example.com".to_string()],
            cc: vec!["b@example.com".to_string()],
            subject: "Test".to_string(),
            html_body: "<p>Hi</p>".to_string(),
            attachments: vec![],
        };

        assert!(!envelope.has_attachments());

        let with_file = Envelope {
            attachments: vec![AttachmentDescriptor {
                filename: "a.txt".to_string(),
                content: Bytes::from_static(b"a"),
            }],
            ..envelope
        };
        assert!(with_file.has_attachments());
    }
}
