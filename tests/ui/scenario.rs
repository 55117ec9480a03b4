use bounded_bitvec::{Bit, BitVector};

fn read_all(bv: &BitVector) -> Vec<u8> {
    (0..bv.len()).map(|i| u8::from(bv.get(i).unwrap())).collect()
}

fn main() {
    let mut bv = BitVector::new(8).unwrap();
    for value in [1u8, 0, 1, 1, 0, 0, 1, 0] {
        bv.append(Bit::try_from(value).unwrap()).unwrap();
    }
    assert_eq!(bv.len(), 8);
    assert_eq!(bv.get(3), Ok(Bit::One));

    bv.remove(2).unwrap();
    assert_eq!(bv.len(), 7);
    assert_eq!(read_all(&bv), [1, 0, 1, 0, 0, 1, 0]);

    bv.set(0, Bit::Zero).unwrap();
    assert_eq!(read_all(&bv), [0, 0, 1, 0, 0, 1, 0]);

    bv.clear();
    assert_eq!(bv.len(), 0);
    bv.destroy().unwrap();
}
