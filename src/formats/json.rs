// JSON export/import of decoded message trees

use crate::core::{Message, MessageError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Failed to parse message JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid message in JSON: {0}")]
    Invalid(#[from] MessageError),
}

impl Message {
    /// Serialize the tree to compact JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize the tree to indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a tree previously written with `to_json`.
    ///
    /// Versions above 7 and operators without an operator type id are
    /// rejected. Trees nested deeper than the default decoder limit exceed
    /// serde_json's recursion limit and fail to parse.
    pub fn from_json(json: &str) -> Result<Self, JsonError> {
        let message: Message = serde_json::from_str(json)?;
        message.validate()?;
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::JsonError;
    use crate::core::{LengthType, Message, MessageError};
    use crate::decoder::{decode_hex, DEFAULT_MAX_DEPTH};

    /// Hex for `depth` single-child sum operators around the literal 5
    fn chain_hex(depth: usize) -> String {
        let mut bits = "000000100000000001".repeat(depth);
        bits.push_str("00010000101");
        while bits.len() % 8 != 0 {
            bits.push('0');
        }
        bits.as_bytes()
            .chunks(4)
            .map(|nibble| {
                let value = nibble.iter().fold(0u32, |acc, bit| acc * 2 + u32::from(bit - b'0'));
                char::from_digit(value, 16).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_literal_json_shape() {
        let root = decode_hex("D2FE28").unwrap().into_root();
        let value: serde_json::Value = serde_json::from_str(&root.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "kind": "literal",
                "version": 6,
                "offset": 0,
                "encoded_bit_length": 21,
                "groups": 3,
                "value": 2021
            })
        );
    }

    #[test]
    fn test_operator_json() {
        let root = decode_hex("38006F45291200").unwrap().into_root();
        let json = root.to_json_pretty().unwrap();
        assert!(json.contains("\"kind\": \"operator\""));
        assert!(json.contains("\"length_type\": \"total_bits\""));

        let restored = Message::from_json(&json).unwrap();
        assert_eq!(restored, root);
        match restored {
            Message::Operator { length_type, .. } => assert_eq!(length_type, LengthType::TotalBits),
            other => panic!("expected operator, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Message::from_json("{\"kind\": \"nope\"}"),
            Err(JsonError::Parse(_))
        ));
    }

    #[test]
    fn test_deep_tree_round_trip() {
        let root = decode_hex(&chain_hex(DEFAULT_MAX_DEPTH)).unwrap().into_root();
        assert_eq!(root.depth(), DEFAULT_MAX_DEPTH + 1);

        let restored = Message::from_json(&root.to_json().unwrap()).unwrap();
        assert_eq!(restored, root);
    }

    #[test]
    fn test_rejects_out_of_range_fields() {
        let json = r#"{"kind":"operator","version":200,"type_id":9,"offset":0,
            "encoded_bit_length":18,"length_type":"child_count","children":[]}"#;
        assert!(matches!(
            Message::from_json(json),
            Err(JsonError::Invalid(MessageError::InvalidVersion { version: 200, .. }))
        ));

        let json = r#"{"kind":"operator","version":1,"type_id":9,"offset":0,
            "encoded_bit_length":18,"length_type":"child_count","children":[]}"#;
        assert!(matches!(
            Message::from_json(json),
            Err(JsonError::Invalid(MessageError::InvalidOperatorType { type_id: 9, .. }))
        ));
    }

    #[test]
    fn test_rejects_operator_with_literal_type() {
        let json = r#"{"kind":"operator","version":1,"type_id":0,"offset":0,
            "encoded_bit_length":29,"length_type":"child_count","children":[
            {"kind":"operator","version":2,"type_id":4,"offset":18,
             "encoded_bit_length":18,"length_type":"child_count","children":[]}]}"#;
        assert!(matches!(
            Message::from_json(json),
            Err(JsonError::Invalid(MessageError::InvalidOperatorType {
                type_id: 4,
                offset: 18
            }))
        ));
    }
}
