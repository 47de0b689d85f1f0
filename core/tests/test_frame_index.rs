mod common;

// Encrypted slot-list side channel.

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use stegframe_core::crypto::{CipherError, CipherSuite, NonceMode};
    use stegframe_core::frames::{FrameIndexChannel, FrameIndexError};
    use stegframe_core::slots::{IndexCarrier, MemoryIndexCarrier};

    use super::common::{cipher, legacy_cipher};

    #[test]
    fn roundtrip_slot_list() {
        let c = legacy_cipher();
        let channel = FrameIndexChannel::new(&c);
        let envelope = channel.encode(&[1, 4, 6, 7, 8]).unwrap();
        assert_eq!(channel.decode(envelope.as_str()).unwrap(), vec![1, 4, 6, 7, 8]);
    }

    #[test]
    fn sealed_plaintext_is_list_literal() {
        let c = legacy_cipher();
        let envelope = FrameIndexChannel::new(&c).encode(&[8, 1, 4]).unwrap();
        assert_eq!(c.decrypt(&envelope).unwrap(), b"[8, 1, 4]");
    }

    #[test]
    fn decoded_list_is_sorted_and_unique() {
        let c = legacy_cipher();
        let channel = FrameIndexChannel::new(&c);
        let envelope = channel.encode(&[8, 1, 4, 4]).unwrap();
        assert_eq!(channel.decode(envelope.as_str()).unwrap(), vec![1, 4, 8]);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let c = legacy_cipher();
        let channel = FrameIndexChannel::new(&c);
        let envelope = channel.encode(&[2, 3]).unwrap();
        let padded = format!("  {}\n", envelope);
        assert_eq!(channel.decode(&padded).unwrap(), vec![2, 3]);
    }

    #[test]
    fn spec_plaintext_is_accepted() {
        let c = legacy_cipher();
        let envelope = c.encrypt(b"1-3,7").unwrap();
        assert_eq!(FrameIndexChannel::new(&c).decode(envelope.as_str()).unwrap(), vec![1, 2, 3, 7]);
    }

    #[test]
    fn single_line_wrapped_envelope_fails_authentication() {
        let c = legacy_cipher();
        let channel = FrameIndexChannel::new(&c);
        let envelope = channel.encode(&[10, 20, 30]).unwrap();
        let wrapped = STANDARD.encode(envelope.as_str());
        assert!(matches!(
            channel.decode(&wrapped),
            Err(FrameIndexError::Decrypt(CipherError::TagMismatch))
        ));
    }

    #[test]
    fn line_wrapped_outer_base64_is_unwrapped() {
        let c = legacy_cipher();
        let channel = FrameIndexChannel::new(&c);
        let envelope = channel.encode(&[10, 20, 30]).unwrap();
        let wrapped = STANDARD.encode(envelope.as_str());
        let lines: Vec<String> = wrapped
            .as_bytes()
            .chunks(16)
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect();
        assert_eq!(channel.decode(&lines.join("\n")).unwrap(), vec![10, 20, 30]);
    }

    #[test]
    fn per_message_nonce_roundtrips() {
        let c = cipher(CipherSuite::ChaCha20Poly1305, NonceMode::PerMessage);
        let channel = FrameIndexChannel::new(&c);
        let envelope = channel.encode(&[0, 99]).unwrap();
        assert_eq!(channel.decode(envelope.as_str()).unwrap(), vec![0, 99]);
    }

    #[test]
    fn empty_list_roundtrips() {
        let c = legacy_cipher();
        let channel = FrameIndexChannel::new(&c);
        let envelope = channel.encode(&[]).unwrap();
        assert!(channel.decode(envelope.as_str()).unwrap().is_empty());
    }

    // ## Failures

    #[test]
    fn blank_text_is_empty() {
        let c = legacy_cipher();
        assert!(matches!(FrameIndexChannel::new(&c).decode("  \n"), Err(FrameIndexError::Empty)));
    }

    #[test]
    fn garbage_fails_to_decrypt() {
        let c = legacy_cipher();
        assert!(matches!(
            FrameIndexChannel::new(&c).decode("definitely not an envelope"),
            Err(FrameIndexError::Decrypt(_))
        ));
    }

    #[test]
    fn other_key_fails_to_decrypt() {
        let sender = cipher(CipherSuite::Aes256Gcm, NonceMode::Static);
        let envelope = FrameIndexChannel::new(&sender).encode(&[1, 2]).unwrap();
        let receiver = legacy_cipher();
        assert!(matches!(
            FrameIndexChannel::new(&receiver).decode(envelope.as_str()),
            Err(FrameIndexError::Decrypt(CipherError::TagMismatch))
        ));
    }

    #[test]
    fn unparseable_plaintext_is_reported() {
        let c = legacy_cipher();
        let envelope = c.encrypt(b"__import__('os').system('id')").unwrap();
        let err = FrameIndexChannel::new(&c).decode(envelope.as_str()).unwrap_err();
        assert!(matches!(err, FrameIndexError::Unparseable { .. }), "{err:?}");
    }

    // ## Through a carrier

    #[test]
    fn hidden_in_memory_carrier() {
        let c = legacy_cipher();
        let channel = FrameIndexChannel::new(&c);
        let mut carrier = MemoryIndexCarrier::new();
        assert!(carrier.reveal().is_none());

        carrier.hide(channel.encode(&[5, 6, 7]).unwrap().as_str()).unwrap();
        let revealed = carrier.reveal().unwrap();
        assert_eq!(channel.decode(&revealed).unwrap(), vec![5, 6, 7]);
    }
}
