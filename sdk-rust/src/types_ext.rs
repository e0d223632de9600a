use crate::{
    InlineDataPart, Message, ModelMessage, ModelResponse, Part, ResponseFormatJson,
    ResponseFormatOption, TextPart, UserMessage,
};
use base64::{engine::general_purpose::STANDARD, Engine};

impl TextPart {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for TextPart {
    fn from(value: &str) -> Self {
        Self {
            text: value.to_string(),
        }
    }
}

impl From<String> for TextPart {
    fn from(value: String) -> Self {
        Self { text: value }
    }
}

impl InlineDataPart {
    /// Wrap data that is already base64-encoded.
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Encode raw bytes, e.g. a file read from disk.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self::new(STANDARD.encode(bytes), mime_type)
    }
}

impl From<TextPart> for Part {
    fn from(value: TextPart) -> Self {
        Self::Text(value)
    }
}

impl From<InlineDataPart> for Part {
    fn from(value: InlineDataPart) -> Self {
        Self::InlineData(value)
    }
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextPart::new(text))
    }

    pub fn inline_data(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self::InlineData(InlineDataPart::new(data, mime_type))
    }
}

impl UserMessage {
    pub fn new<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Part>,
    {
        Self {
            content: parts.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<UserMessage> for Message {
    fn from(value: UserMessage) -> Self {
        Self::User(value)
    }
}

impl ModelMessage {
    pub fn new<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Part>,
    {
        Self {
            content: parts.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ModelMessage> for Message {
    fn from(value: ModelMessage) -> Self {
        Self::Model(value)
    }
}

impl Message {
    pub fn user<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Part>,
    {
        Self::User(UserMessage::new(parts))
    }

    pub fn model<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Part>,
    {
        Self::Model(ModelMessage::new(parts))
    }

    #[must_use]
    pub fn content(&self) -> &[Part] {
        match self {
            Self::User(message) => &message.content,
            Self::Model(message) => &message.content,
        }
    }
}

impl ResponseFormatOption {
    /// Structured output constrained by `schema`.
    pub fn json(name: impl Into<String>, schema: serde_json::Value) -> Self {
        Self::Json(ResponseFormatJson {
            name: name.into(),
            description: None,
            schema: Some(schema),
        })
    }
}

impl ModelResponse {
    /// Concatenated text of all text parts, or `None` when the model
    /// returned no text at all.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .content
            .iter()
            .filter_map(|part| match part {
                Part::Text(text_part) => Some(text_part.text.as_str()),
                Part::InlineData(_) => None,
            })
            .collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_joins_text_parts_and_skips_data() {
        let response = ModelResponse {
            content: vec![
                Part::text("Hello, "),
                Part::inline_data("AAAA", "image/png"),
                Part::text("world"),
            ],
            usage: None,
        };

        assert_eq!(response.text().as_deref(), Some("Hello, world"));
    }

    #[test]
    fn response_text_is_none_without_text_parts() {
        let response = ModelResponse::default();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn inline_data_from_bytes_encodes_base64() {
        let part = InlineDataPart::from_bytes(b"hi", "text/plain");
        assert_eq!(part.data, "aGk=");
        assert_eq!(part.mime_type, "text/plain");
    }
}
