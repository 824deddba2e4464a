// Version sum over a message tree

use crate::core::Message;

/// Sum the version field of every message in the tree
pub fn version_sum(message: &Message) -> u64 {
    message.version() as u64 + message.children().iter().map(version_sum).sum::<u64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitwise::BitSource;
    use crate::decoder::MessageDecoder;

    fn lit(version: u8, value: u64) -> Message {
        Message::literal(version, value).unwrap()
    }

    fn op(version: u8, type_id: u8, children: Vec<Message>) -> Message {
        Message::operator(version, type_id, children).unwrap()
    }

    fn sum_hex(hex: &str) -> u64 {
        let mut source = BitSource::from_hex(hex).unwrap();
        version_sum(&MessageDecoder::new().decode(&mut source).unwrap())
    }

    #[test]
    fn test_reference_vectors() {
        assert_eq!(sum_hex("D2FE28"), 6);
        assert_eq!(sum_hex("38006F45291200"), 9);
        assert_eq!(sum_hex("EE00D40C823060"), 14);
        assert_eq!(sum_hex("8A004A801A8002F478"), 16);
        assert_eq!(sum_hex("620080001611562C8802118E34"), 12);
        assert_eq!(sum_hex("C0015000016115A2E0802F182340"), 23);
        assert_eq!(sum_hex("A0016C880162017C3686B18A3D4780"), 31);
    }

    #[test]
    fn test_permutation_invariant() {
        let a = lit(3, 1);
        let b = op(5, 1, vec![lit(7, 2)]);
        let c = lit(2, 9);

        let forward = op(1, 0, vec![a.clone(), b.clone(), c.clone()]);
        let shuffled = op(1, 0, vec![c, a, b]);
        assert_eq!(version_sum(&forward), 18);
        assert_eq!(version_sum(&forward), version_sum(&shuffled));
    }

    #[test]
    fn test_empty_operator() {
        assert_eq!(version_sum(&op(4, 0, vec![])), 4);
    }
}
