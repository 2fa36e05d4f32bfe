// ABOUTME: Integration tests for serial number parsing and validation.
// ABOUTME: The string form is the external identity handle for containers.

use stowage::types::{KindCode, SerialNumber, SerialNumberError};

mod parsing {
    use super::*;

    #[test]
    fn parse_liquid_serial() {
        let serial = SerialNumber::parse("KON-L-1").unwrap();
        assert_eq!(serial.code(), KindCode::Liquid);
        assert_eq!(serial.seq(), 1);
    }

    #[test]
    fn parse_gas_serial() {
        let serial = SerialNumber::parse("KON-G-42").unwrap();
        assert_eq!(serial.code(), KindCode::Gas);
        assert_eq!(serial.seq(), 42);
    }

    #[test]
    fn parse_refrigerated_serial() {
        let serial = SerialNumber::parse("KON-C-7").unwrap();
        assert_eq!(serial.code(), KindCode::Refrigerated);
    }

    #[test]
    fn display_round_trips() {
        let serial = SerialNumber::parse("KON-G-1234").unwrap();
        assert_eq!(serial.to_string(), "KON-G-1234");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let serial = SerialNumber::parse("  KON-L-3\n").unwrap();
        assert_eq!(serial.to_string(), "KON-L-3");
    }
}

mod validation {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            SerialNumber::parse(""),
            Err(SerialNumberError::Empty)
        ));
    }

    #[test]
    fn wrong_prefix_is_rejected() {
        assert!(matches!(
            SerialNumber::parse("CNT-L-1"),
            Err(SerialNumberError::BadPrefix)
        ));
    }

    #[test]
    fn unknown_kind_code_is_rejected() {
        assert!(matches!(
            SerialNumber::parse("KON-X-1"),
            Err(SerialNumberError::UnknownKindCode(_))
        ));
    }

    #[test]
    fn missing_sequence_is_rejected() {
        assert!(matches!(
            SerialNumber::parse("KON-L"),
            Err(SerialNumberError::InvalidSequence(_))
        ));
    }

    #[test]
    fn missing_kind_code_is_rejected() {
        assert!(matches!(
            SerialNumber::parse("KON"),
            Err(SerialNumberError::BadPrefix)
        ));
    }

    #[test]
    fn non_numeric_sequence_is_rejected() {
        assert!(matches!(
            SerialNumber::parse("KON-L-abc"),
            Err(SerialNumberError::InvalidSequence(_))
        ));
    }

    #[test]
    fn zero_sequence_is_rejected() {
        assert!(matches!(
            SerialNumber::parse("KON-L-0"),
            Err(SerialNumberError::ZeroSequence)
        ));
    }
}

mod serde_form {
    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let serial = SerialNumber::parse("KON-C-9").unwrap();
        let json = serde_json::to_string(&serial).unwrap();
        assert_eq!(json, "\"KON-C-9\"");
    }

    #[test]
    fn deserializes_from_plain_string() {
        let serial: SerialNumber = serde_json::from_str("\"KON-G-5\"").unwrap();
        assert_eq!(serial.code(), KindCode::Gas);
        assert_eq!(serial.seq(), 5);
    }

    #[test]
    fn invalid_string_fails_deserialization() {
        let result: Result<SerialNumber, _> = serde_json::from_str("\"KON-Z-5\"");
        assert!(result.is_err());
    }
}
