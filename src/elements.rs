//! Canonical periodic-table lookups.
//!
//! A single symbol table backs both directions of the element-name/number duality:
//! [`symbol_to_number`] and [`number_to_symbol`]. The [`fold_alias`] function maps the
//! tetrel elements the regression models were not trained on (Si, Sn, Pb) onto carbon,
//! matching the folded indices the models expect.

/// The highest atomic number with a canonical symbol (Oganesson).
pub const MAX_ATOMIC_NUMBER: u8 = 118;

/// Canonical element symbols indexed by atomic number; index 0 is a placeholder.
const SYMBOLS: [&str; 119] = [
    "", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge",
    "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd",
    "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg",
    "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Converts an element symbol to its atomic number.
///
/// Matching is case-insensitive so that upper-cased symbols from legacy geometry files
/// ("CL", "FE") are understood.
///
/// # Examples
///
/// ```
/// use qboost::elements::symbol_to_number;
///
/// assert_eq!(symbol_to_number("C"), Some(6));
/// assert_eq!(symbol_to_number("cl"), Some(17));
/// assert_eq!(symbol_to_number("Xx"), None);
/// ```
pub fn symbol_to_number(symbol: &str) -> Option<u8> {
    SYMBOLS
        .iter()
        .position(|candidate| !candidate.is_empty() && candidate.eq_ignore_ascii_case(symbol))
        .map(|index| index as u8)
}

/// Converts an atomic number to its canonical element symbol.
///
/// # Examples
///
/// ```
/// use qboost::elements::number_to_symbol;
///
/// assert_eq!(number_to_symbol(8), Some("O"));
/// assert_eq!(number_to_symbol(0), None);
/// assert_eq!(number_to_symbol(119), None);
/// ```
pub fn number_to_symbol(number: u8) -> Option<&'static str> {
    if number == 0 || number > MAX_ATOMIC_NUMBER {
        return None;
    }
    Some(SYMBOLS[number as usize])
}

/// Folds aliased elements onto the canonical element the models were trained with.
///
/// Silicon, tin and lead are treated as carbon; every other atomic number maps to itself.
#[inline]
pub fn fold_alias(number: u8) -> u8 {
    match number {
        14 | 50 | 82 => 6,
        _ => number,
    }
}
