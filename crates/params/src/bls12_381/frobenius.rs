//! Frobenius coefficients for the Fq2/Fq6/Fq12 tower
//!
//! Indexed as `[power - 1][index - 1]`, where `power` is taken modulo the
//! extension degree and `index` is the position of the sub-element being
//! scaled. Each entry is an Fq2 value `(c0, c1)`. The Fq12 coefficients
//! are Fq6 values whose upper two Fq2 components are zero, so only the
//! low component is stored.

const ZERO: &str = "0";
const ONE: &str = "1";

/// Q - 1
const Q_MINUS_1: &str = "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaaa";
const W1: &str = "1a0111ea397fe699ec02408663d4de85aa0d857d89759ad4897d29650fb85f9b409427eb4f49fffd8bfd00000000aaac";
const W2: &str = "1a0111ea397fe699ec02408663d4de85aa0d857d89759ad4897d29650fb85f9b409427eb4f49fffd8bfd00000000aaad";
const W3: &str = "5f19672fdf76ce51ba69c6076a0f77eaddb3a93be6f89688de17d813620a00022e01fffffffefffe";
const W4: &str = "5f19672fdf76ce51ba69c6076a0f77eaddb3a93be6f89688de17d813620a00022e01fffffffeffff";

const F1A: &str = "1904d3bf02bb0667c231beb4202c0d1f0fd603fd3cbd5f4f7b2443d784bab9c4f67ea53d63e7813d8d0775ed92235fb8";
const F1B: &str = "0fc3e2b36c4e03288e9e902231f9fb854a14787b6c7b36fec0c8ec971f63c5f282d5ac14d6c7ec22cf78a126ddc4af3";
const F3A: &str = "135203e60180a68ee2e9c448d77a2cd91c3dedd930b1cf60ef396489f61eb45e304466cf3e67fa0af1ee7b04121bdea2";
const F3B: &str = "06af0e0437ff400b6831e36d6bd17ffe48395dabc2d3435e77f76e17009241c5ee67992f72ec05f4c81084fbede3cc09";
const F5A: &str = "144e4211384586c16bd3ad4afa99cc9170df3560e77982d0db45f3536814f0bd5871c1908bd478cd1ee605167ff82995";
const F5B: &str = "05b2cfd9013a5fd8df47fa6b48b1e045f39816240c0b8fee8beadf4d8e9c0566c63a3e6e257f87329b18fae980078116";

/// Fq2 coefficient for odd powers: the conjugation `i -> -i`
pub const FQ2: [[&str; 1]; 1] = [[Q_MINUS_1]];

/// Fq6 coefficients, powers 1..=5, indices 1..=2
pub const FQ6: [[(&str, &str); 2]; 5] = [
    [(ZERO, W1), (W2, ZERO)],
    [(W3, ZERO), (W1, ZERO)],
    [(ZERO, ONE), (Q_MINUS_1, ZERO)],
    [(W1, ZERO), (W3, ZERO)],
    [(ZERO, W3), (W4, ZERO)],
];

/// Fq12 coefficients, powers 1..=11, index 1
pub const FQ12: [[(&str, &str); 1]; 11] = [
    [(F1A, F1B)],
    [(W4, ZERO)],
    [(F3A, F3B)],
    [(W3, ZERO)],
    [(F5A, F5B)],
    [(Q_MINUS_1, ZERO)],
    [(F1B, F1A)],
    [(W1, ZERO)],
    [(F3B, F3A)],
    [(W2, ZERO)],
    [(F5B, F5A)],
];
