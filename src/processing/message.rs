//! # Hidden Message
//!
//! A [`Message`] is an ordered sequence of 8-bit code units. Text is mapped one
//! character to one byte using the character's code point, so only characters
//! up to U+00FF can be hidden. The zero byte is reserved as the terminator and
//! never appears inside a message.

use super::error::{Result, StegoError};

/// Payload hidden in, or recovered from, a carrier image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message(Vec<u8>);

impl Message {
    /// Build a message from text, one byte per character.
    ///
    /// # Errors
    /// - [`StegoError::UnsupportedCharacter`] for characters above U+00FF
    /// - [`StegoError::EmbeddedTerminator`] for NUL characters
    pub fn from_text(text: &str) -> Result<Self> {
        let mut bytes = Vec::with_capacity(text.len());
        for (position, character) in text.chars().enumerate() {
            let byte = u8::try_from(u32::from(character))
                .map_err(|_| StegoError::UnsupportedCharacter { character, position })?;
            bytes.push(byte);
        }
        Self::from_bytes(bytes)
    }

    /// Build a message from raw code units, rejecting zero bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if let Some(position) = bytes.iter().position(|&b| b == 0) {
            return Err(StegoError::EmbeddedTerminator { position });
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render each code unit as the character with the same code point.
    pub fn to_text(&self) -> String {
        self.0.iter().map(|&b| char::from(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_text() {
        let message = Message::from_text("Hello").unwrap();
        assert_eq!(message.as_bytes(), b"Hello");
        assert_eq!(message.to_text(), "Hello");
    }

    #[test]
    fn test_latin1_text_is_single_byte() {
        let message = Message::from_text("café").unwrap();
        assert_eq!(message.as_bytes(), &[b'c', b'a', b'f', 0xE9]);
        assert_eq!(message.to_text(), "café");
    }

    #[test]
    fn test_wide_character_rejected() {
        let err = Message::from_text("5€").unwrap_err();
        assert!(matches!(
            err,
            StegoError::UnsupportedCharacter { character: '€', position: 1 }
        ));
    }

    #[test]
    fn test_nul_rejected() {
        let err = Message::from_text("ab\0c").unwrap_err();
        assert!(matches!(err, StegoError::EmbeddedTerminator { position: 2 }));

        let err = Message::from_bytes(vec![0]).unwrap_err();
        assert!(matches!(err, StegoError::EmbeddedTerminator { position: 0 }));
    }

    #[test]
    fn test_empty_message() {
        let message = Message::from_text("").unwrap();
        assert!(message.is_empty());
        assert_eq!(message, Message::default());
    }
}
