use bounded_bitvec::{Bit, BitVector, Error};

const CAPACITY: usize = 1000;

fn main() {
    let mut bv = BitVector::new(CAPACITY).unwrap();
    for i in 0..CAPACITY {
        bv.append(i % 2 == 0).unwrap();
    }
    assert_eq!(bv.append(false), Err(Error::CapacityExceeded { capacity: CAPACITY }));
    assert_eq!(bv.count_ones(), CAPACITY / 2);

    // draining from the front shifts every remaining bit down
    for i in 0..CAPACITY {
        assert_eq!(bv.get(0), Ok(Bit::from(i % 2 == 0)));
        bv.remove(0).unwrap();
    }
    assert!(bv.is_empty());
    assert!(matches!(bv.get(0), Err(Error::OutOfBounds { .. })));
    bv.destroy().unwrap();
}
