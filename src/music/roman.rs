// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Roman numerals for fret labels.

const NUMERALS: [(i32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Render a fret number as a Roman numeral.
///
/// The open string (0) has no numeral and renders as `"0"`; negative
/// values (muted strings) render as `"x"`.
pub fn to_roman(value: i32) -> String {
    if value < 0 {
        return "x".to_string();
    }
    if value == 0 {
        return "0".to_string();
    }

    let mut remaining = value;
    let mut out = String::new();
    for &(amount, symbol) in NUMERALS.iter() {
        while remaining >= amount {
            out.push_str(symbol);
            remaining -= amount;
        }
    }
    out
}
