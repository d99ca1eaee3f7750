//! Binary ↔ spin mapping.
//!
//! Solvers work over binaries X ∈ {0, 1}; results are reported in spin
//! notation S ∈ {+1, −1} via S = 1 − 2X, rendered as `+`/`-` sign tokens.

/// Map a {0, 1} binary value to its {+1, −1} spin: `S = 1 − 2X`.
pub fn to_spin(bit: u8) -> i8 {
    1 - 2 * bit as i8
}

/// The sign token for a spin value: `+` for +1, `-` for −1.
pub fn sign_token(spin: i8) -> char {
    if spin == 1 { '+' } else { '-' }
}

/// Render a {0, 1} assignment as a concatenated string of sign tokens.
pub fn sign_string(assignment: &[u8]) -> String {
    assignment
        .iter()
        .map(|&bit| sign_token(to_spin(bit)))
        .collect()
}
