use bounded_bitvec::{BitVector, Error};

fn main() {
    let mut bv = BitVector::new(16).unwrap();
    bv.append(true).unwrap();
    bv.append(true).unwrap();

    let err = bv.destroy().unwrap_err();
    assert_eq!(err.error(), Error::ResourceBusy { length: 2 });

    // still usable after the rejected destroy
    let mut bv = err.into_inner();
    bv.set(1, false).unwrap();
    assert_eq!(bv.iter().collect::<Vec<_>>(), [true, false]);

    bv.clear();
    bv.clear();
    assert_eq!(bv.capacity(), 16);
    bv.destroy().unwrap();

    BitVector::destroy_opt(None).unwrap();
}
