//! Fixed-size line windows centred on a cell
//!
//! A window of `N = 2r + 1` cells is read along one direction through a
//! position and encoded one byte per cell. Shapes are then tested by direct
//! slice comparison at every offset that covers the centre cell.

use super::{Board, Pos, Stone};

/// Read `N` cells along `(dr, dc)` centred on `pos`.
///
/// `encode` receives `None` for cells beyond the board edge. The centre cell
/// is always encoded as `center`, whatever the board holds there, so callers
/// can test a hypothetical stone without touching the board.
pub fn read<const N: usize>(
    board: &Board,
    pos: Pos,
    dr: i32,
    dc: i32,
    center: u8,
    encode: impl Fn(Option<Stone>) -> u8,
) -> [u8; N] {
    let radius = (N / 2) as i32;
    let mut cells = [0u8; N];
    for (slot, i) in cells.iter_mut().zip(-radius..=radius) {
        *slot = if i == 0 {
            center
        } else {
            encode(pos.offset(dr, dc, i).map(|p| board.get(p)))
        };
    }
    cells
}

/// True if `shape` occurs anywhere in `window`.
#[inline]
pub fn contains(window: &[u8], shape: &[u8]) -> bool {
    window.windows(shape.len()).any(|w| w == shape)
}

/// True if `shape` occurs at an offset whose span includes the centre index.
#[inline]
pub fn matches_through_center(window: &[u8], shape: &[u8]) -> bool {
    let n = shape.len();
    if n == 0 || n > window.len() {
        return false;
    }
    let center = window.len() / 2;
    let lo = center.saturating_sub(n - 1);
    let hi = center.min(window.len() - n);
    (lo..=hi).any(|start| &window[start..start + n] == shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_encodes_edges_and_center() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 1), Stone::White);
        let w: [u8; 5] = read(&board, Pos::new(0, 0), 0, 1, b'C', |cell| match cell {
            None => b'#',
            Some(Stone::Empty) => b'.',
            Some(Stone::Black) => b'X',
            Some(Stone::White) => b'O',
        });
        assert_eq!(&w, b"##CO.");
    }

    #[test]
    fn test_anchor_must_cover_center() {
        // Center is index 4; "111" at 0..3 does not reach it
        assert!(!matches_through_center(b"111000000", b"111"));
        assert!(matches_through_center(b"000011100", b"111"));
        assert!(matches_through_center(b"002111000", b"111"));
        assert!(contains(b"111000000", b"111"));
    }
}
