use noroshi_bit_view::BitViewMut;

#[test]
fn set_targets_msb_first() {
    let mut words = [0_u8];
    let mut view = BitViewMut::new(&mut words);

    view.set(0, true);
    assert_eq!(view.words(), &[1 << 7]);

    view.set(7, true);
    assert_eq!(view.words(), &[0x81]);

    view.set(0, false);
    assert_eq!(view.words(), &[0x01]);
}

#[test]
fn set_wide_words() {
    let mut words = [0_u32];
    BitViewMut::new(&mut words).set(0, true);
    assert_eq!(words, [1 << 31]);

    let mut words = [0_u64];
    BitViewMut::new(&mut words).set(0, true);
    assert_eq!(words, [1 << 63]);
}

#[test]
fn round_trip_leaves_neighbors_alone() {
    let mut words = [0_u8; 2];
    let mut view = BitViewMut::new(&mut words);

    for pos in 0..16 {
        view.set(pos, true);
        assert!(view.get(pos));

        for other in (0..16).filter(|&p| p != pos) {
            assert!(!view.get(other));
        }

        view.set(pos, false);
        assert!(!view.get(pos));
    }

    assert_eq!(view.words(), &[0, 0]);
}

#[test]
fn flip_twice_is_identity() {
    let mut words = [0b0110_0000_u8];
    let mut view = BitViewMut::new(&mut words);

    view.flip(1);
    assert!(!view.get(1));
    view.flip(1);
    assert!(view.get(1));

    view.flip(0);
    assert_eq!(view.words(), &[0b1110_0000]);
}

#[test]
fn bit_handle_reads_and_writes() {
    let mut words = [0_u8];
    let mut view = BitViewMut::new(&mut words);

    let mut bit = view.bit_mut(2);
    assert!(!bit.get());

    bit.set(true);
    assert!(bit.get());

    bit.flip();
    assert!(!bit.get());

    bit.set(true);
    assert_eq!(view.words(), &[0b0010_0000]);
}

#[test]
fn view_interop() {
    let mut words = [0_u8];
    let mut view = BitViewMut::new(&mut words);

    view.set(4, true);
    assert!(view.as_view().get(4));
    assert_eq!(view.as_view().iter().filter(|&bit| bit).count(), 1);

    let words = view.into_inner();
    assert_eq!(words, &[0b0000_1000]);
}
