use proptest::prelude::*;

use lucky_primitives::base58;
use lucky_primitives::util::{VarInt, WireReader, WireWriter};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn base58_roundtrip(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let encoded = base58::encode(&data);
        let decoded = base58::decode(&encoded).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn base58_check_roundtrip(data in prop::collection::vec(any::<u8>(), 1..64)) {
        let encoded = base58::check_encode(&data);
        let decoded = base58::check_decode(&encoded).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn varint_roundtrip(value in any::<u64>()) {
        let encoded = VarInt(value).to_bytes();
        let mut reader = WireReader::new(&encoded);
        let decoded = reader.read_varint().unwrap();
        prop_assert_eq!(decoded.value(), value);
        prop_assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn wire_integers_roundtrip(a in any::<u32>(), b in any::<u64>()) {
        let mut writer = WireWriter::new();
        writer.write_u32_le(a);
        writer.write_u64_le(b);
        let data = writer.into_bytes();
        let mut reader = WireReader::new(&data);
        prop_assert_eq!(reader.read_u32_le().unwrap(), a);
        prop_assert_eq!(reader.read_u64_le().unwrap(), b);
    }
}
