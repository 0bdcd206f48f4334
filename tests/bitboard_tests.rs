use seabattle::{BitBoard, BitBoardError, Orientation};

#[test]
fn test_get_set() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(1, 2).unwrap());

    bb.clear_all();
    assert!(bb.is_empty());

    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
}

#[test]
fn test_full_width_backing_integer() {
    // 16 cells use every bit of a u16
    let all = !BitBoard::<u16, 4>::new();
    assert_eq!(all.count_ones(), 16);
    assert!(all.get(3, 3).unwrap());
}

#[test]
fn test_iter_row_major() {
    let mut bb = BitBoard::<u16, 4>::new();
    bb.set(3, 3).unwrap();
    bb.set(0, 1).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_line_and_dilate() {
    let line = BitBoard::<u128, 10>::line(2, 2, 3, Orientation::Horizontal).unwrap();
    assert_eq!(line.count_ones(), 3);
    // 3x5 box around the run
    assert_eq!(line.dilate().count_ones(), 15);
    assert!(line.is_subset(&line.dilate()));
    assert!(!line.dilate().is_subset(&line));
    assert!(BitBoard::<u128, 10>::line(2, 8, 3, Orientation::Horizontal).is_err());
}

#[test]
fn test_set_algebra() {
    let a = BitBoard::<u128, 10>::line(0, 0, 2, Orientation::Vertical).unwrap();
    let b = BitBoard::<u128, 10>::line(1, 0, 2, Orientation::Horizontal).unwrap();
    assert!(a.intersects(&b));
    assert_eq!((a & b).iter_set_bits().collect::<Vec<_>>(), vec![(1, 0)]);
    assert_eq!((a | b).count_ones(), 3);
    assert_eq!((!a).count_ones(), 98);
}
