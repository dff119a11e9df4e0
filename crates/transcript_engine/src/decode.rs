use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// A document decoded to UTF-8, with the label of the encoding used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDocument {
    pub text: String,
    pub encoding_label: String,
}

/// Decode raw file bytes using: BOM -> strict UTF-8 -> chardetng guess.
///
/// Decoding is permissive by contract: byte sequences invalid in the
/// chosen encoding are replaced, never failing the whole document.
pub fn decode_document(bytes: &[u8]) -> DecodedDocument {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return DecodedDocument {
            text: text.to_owned(),
            encoding_label: "UTF-8".to_string(),
        };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    decode_with(bytes, encoding)
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> DecodedDocument {
    let (text, _, _) = encoding.decode(bytes);
    DecodedDocument {
        text: text.into_owned(),
        encoding_label: encoding.name().to_string(),
    }
}
