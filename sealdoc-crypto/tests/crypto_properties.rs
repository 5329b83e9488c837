//! Property-based tests for the cipher boundary.
//!
//! Properties that must always hold:
//! - Sealing is reversible with the correct key
//! - Wrong keys fail to open
//! - Tampering is detected
//! - The base64 token form is lossless

use proptest::prelude::*;
use sealdoc_crypto::{open, open_string, seal, seal_string, CipherKey, SealedValue};

fn plaintext_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..4096)
}

fn string_strategy() -> impl Strategy<Value = String> {
    ".{0,512}"
}

proptest! {
    #[test]
    fn roundtrip_preserves_bytes(plaintext in plaintext_strategy()) {
        let key = CipherKey::random();
        let sealed = seal(&key, &plaintext).unwrap();
        prop_assert_eq!(open(&key, &sealed).unwrap(), plaintext);
    }

    #[test]
    fn roundtrip_preserves_strings(plaintext in string_strategy()) {
        let key = CipherKey::random();
        let token = seal_string(&key, &plaintext).unwrap();
        prop_assert_eq!(open_string(&key, &token).unwrap(), plaintext);
    }

    #[test]
    fn wrong_key_never_opens(plaintext in plaintext_strategy()) {
        let sealed = seal(&CipherKey::random(), &plaintext).unwrap();
        prop_assert!(open(&CipherKey::random(), &sealed).is_err());
    }

    #[test]
    fn bit_flip_is_detected(plaintext in plaintext_strategy(), index in any::<prop::sample::Index>()) {
        let key = CipherKey::random();
        let mut sealed = seal(&key, &plaintext).unwrap();
        let i = index.index(sealed.ciphertext.len());
        sealed.ciphertext[i] ^= 0x01;
        prop_assert!(open(&key, &sealed).is_err());
    }

    #[test]
    fn token_form_is_lossless(plaintext in plaintext_strategy()) {
        let key = CipherKey::random();
        let sealed = seal(&key, &plaintext).unwrap();
        let decoded = SealedValue::from_token(&sealed.to_token()).unwrap();
        prop_assert_eq!(open(&key, &decoded).unwrap(), plaintext);
    }
}
