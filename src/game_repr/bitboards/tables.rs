// Attack tables, all built at compile time.

pub static KNIGHT_ATTACKS: [u64; 64] = leaper_table(&[
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
]);

pub static KING_ATTACKS: [u64; 64] = leaper_table(&[
    (0, 1), (1, 1), (1, 0), (1, -1),
    (0, -1), (-1, -1), (-1, 0), (-1, 1),
]);

/// PAWN_ATTACKS[color][square]: squares a pawn of that colour attacks.
/// Index 0 = White, 1 = Black.
pub static PAWN_ATTACKS: [[u64; 64]; 2] = [
    leaper_table(&[(-1, 1), (1, 1)]),
    leaper_table(&[(-1, -1), (1, -1)]),
];

// Direction indices into RAYS, with their (file, rank) steps.
pub const NORTH: usize = 0;
pub const NORTH_EAST: usize = 1;
pub const EAST: usize = 2;
pub const SOUTH_EAST: usize = 3;
pub const SOUTH: usize = 4;
pub const SOUTH_WEST: usize = 5;
pub const WEST: usize = 6;
pub const NORTH_WEST: usize = 7;

const STEPS: [(i8, i8); 8] = [
    (0, 1), (1, 1), (1, 0), (1, -1),
    (0, -1), (-1, -1), (-1, 0), (-1, 1),
];

pub const ORTHOGONAL: [usize; 4] = [NORTH, EAST, SOUTH, WEST];
pub const DIAGONAL: [usize; 4] = [NORTH_EAST, SOUTH_EAST, SOUTH_WEST, NORTH_WEST];

/// RAYS[direction][square]: every square strictly beyond `square` in that
/// direction, up to the board edge.
pub static RAYS: [[u64; 64]; 8] = generate_rays();

/// True when squares along the direction have increasing indices, so the
/// nearest blocker is the lowest set bit.
#[inline(always)]
pub const fn is_ascending(direction: usize) -> bool {
    matches!(direction, NORTH | NORTH_EAST | EAST | NORTH_WEST)
}

const fn leaper_table(deltas: &[(i8, i8)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0;
    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut i = 0;
        while i < deltas.len() {
            let f = file + deltas[i].0;
            let r = rank + deltas[i].1;
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                table[sq] |= 1u64 << (r * 8 + f);
            }
            i += 1;
        }
        sq += 1;
    }
    table
}

const fn generate_rays() -> [[u64; 64]; 8] {
    let mut rays = [[0u64; 64]; 8];
    let mut dir = 0;
    while dir < 8 {
        let (df, dr) = STEPS[dir];
        let mut sq = 0;
        while sq < 64 {
            let mut f = (sq % 8) as i8 + df;
            let mut r = (sq / 8) as i8 + dr;
            while f >= 0 && f < 8 && r >= 0 && r < 8 {
                rays[dir][sq] |= 1u64 << (r * 8 + f);
                f += df;
                r += dr;
            }
            sq += 1;
        }
        dir += 1;
    }
    rays
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_attacks() {
        // Knight on d4 attacks b3, b5, c2, c6, e2, e6, f3, f5
        let expected = (1u64 << 17) | (1u64 << 33) | (1u64 << 10) | (1u64 << 42) |
                       (1u64 << 12) | (1u64 << 44) | (1u64 << 21) | (1u64 << 37);
        assert_eq!(KNIGHT_ATTACKS[27], expected);
        // corner knight only has two targets
        assert_eq!(KNIGHT_ATTACKS[0].count_ones(), 2);
    }

    #[test]
    fn test_king_attacks() {
        assert_eq!(KING_ATTACKS[28].count_ones(), 8);
        assert_eq!(KING_ATTACKS[0], (1u64 << 1) | (1u64 << 8) | (1u64 << 9));
    }

    #[test]
    fn test_pawn_attacks() {
        // White pawn on e4 attacks d5, f5
        assert_eq!(PAWN_ATTACKS[0][28], (1u64 << 35) | (1u64 << 37));
        // Black pawn on e5 attacks d4, f4
        assert_eq!(PAWN_ATTACKS[1][36], (1u64 << 27) | (1u64 << 29));
        // Edge files attack one square only
        assert_eq!(PAWN_ATTACKS[0][8], 1u64 << 17);
    }

    #[test]
    fn test_rays() {
        let a_file_above_a1 = (1u64 << 8) | (1u64 << 16) | (1u64 << 24) | (1u64 << 32) |
                              (1u64 << 40) | (1u64 << 48) | (1u64 << 56);
        assert_eq!(RAYS[NORTH][0], a_file_above_a1);

        let long_diagonal = (1u64 << 9) | (1u64 << 18) | (1u64 << 27) | (1u64 << 36) |
                            (1u64 << 45) | (1u64 << 54) | (1u64 << 63);
        assert_eq!(RAYS[NORTH_EAST][0], long_diagonal);
        assert_eq!(RAYS[SOUTH_WEST][0], 0);
        assert_eq!(RAYS[WEST][7], 0x7F);
    }
}
