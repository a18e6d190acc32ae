//! This module provides reading of XYZ geometry files and writing of charge files.
//!
//! The XYZ reader is deliberately lenient: any line with at least four whitespace-separated
//! fields is an atom record, and a two-field line outside the comment position declares the
//! molecule's total charge (the common charge/multiplicity header). Files that cannot be
//! parsed are reported per file so that a batch run can skip them and continue. The charge
//! writer produces one fixed-width output unit per molecule, echoing the geometry followed
//! by the corrected charges.

use crate::elements::{fold_alias, symbol_to_number, MAX_ATOMIC_NUMBER};
use crate::error::QboostError;
use crate::types::{Molecule, MoleculeView};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// The extension given to output charge files, replacing the geometry file's `.xyz`.
pub const CHARGE_FILE_EXTENSION: &str = "charges";

/// Number of charge values per line in the output unit.
const CHARGES_PER_LINE: usize = 10;

/// Reads a molecule from an XYZ geometry file.
///
/// Element tokens may be symbols (any case) or numeric strings; they are alias-folded
/// before storage. The declared total charge defaults to 0 when the file carries no charge
/// line.
///
/// # Errors
///
/// Returns `QboostError::Io` if the file cannot be read, `QboostError::XyzParse` for an
/// unknown element, malformed coordinate, or malformed charge line, and the `Molecule`
/// constructor errors for degenerate geometry. All of these are molecule-scoped: batch
/// callers should skip the file with a warning.
pub fn read_xyz_file(path: &Path) -> Result<Molecule, QboostError> {
    let content = fs::read_to_string(path).map_err(|io_error| QboostError::Io {
        path: path.to_path_buf(),
        source: io_error,
    })?;
    parse_xyz(&content, path)
}

fn parse_xyz(content: &str, path: &Path) -> Result<Molecule, QboostError> {
    let mut elements = Vec::new();
    let mut coordinates = Vec::new();
    let mut total_charge = 0i32;

    for (index, line) in content.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() >= 4 {
            let number = parse_element(fields[0]).ok_or_else(|| QboostError::XyzParse {
                path: path.to_path_buf(),
                line: index + 1,
                details: format!("unknown element '{}'", fields[0]),
            })?;
            let mut position = [0.0; 3];
            for (axis, field) in fields[1..4].iter().enumerate() {
                position[axis] = field.parse().map_err(|_| QboostError::XyzParse {
                    path: path.to_path_buf(),
                    line: index + 1,
                    details: format!("invalid coordinate '{field}'"),
                })?;
            }
            elements.push(fold_alias(number));
            coordinates.push(position);
        } else if index != 1 && fields.len() == 2 {
            total_charge = fields[0].parse().map_err(|_| QboostError::XyzParse {
                path: path.to_path_buf(),
                line: index + 1,
                details: format!("invalid total charge '{}'", fields[0]),
            })?;
        }
    }

    if elements.is_empty() {
        return Err(QboostError::XyzParse {
            path: path.to_path_buf(),
            line: 1,
            details: "no atom lines found".to_string(),
        });
    }

    Molecule::new(elements, coordinates, total_charge, path)
}

fn parse_element(token: &str) -> Option<u8> {
    if let Ok(number) = token.parse::<u8>() {
        return (1..=MAX_ATOMIC_NUMBER).contains(&number).then_some(number);
    }
    symbol_to_number(token)
}

/// Reads a batch of geometry files, skipping the ones that fail.
///
/// Successfully parsed molecules keep their input order; each failure is returned together
/// with its path so the caller can report a warning. One corrupt file never aborts the
/// batch.
pub fn read_molecules(paths: &[PathBuf]) -> (Vec<Molecule>, Vec<(PathBuf, QboostError)>) {
    let mut molecules = Vec::with_capacity(paths.len());
    let mut skipped = Vec::new();
    for path in paths {
        match read_xyz_file(path) {
            Ok(molecule) => molecules.push(molecule),
            Err(error) => skipped.push((path.clone(), error)),
        }
    }
    (molecules, skipped)
}

/// Collects the `.xyz` files of a directory, sorted by path.
///
/// The extension match is exact (lowercase `xyz`), as required of input files.
///
/// # Errors
///
/// Returns `QboostError::Io` if the directory cannot be listed.
pub fn collect_xyz_paths(directory: &Path) -> Result<Vec<PathBuf>, QboostError> {
    let entries = fs::read_dir(directory).map_err(|io_error| QboostError::Io {
        path: directory.to_path_buf(),
        source: io_error,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "xyz"))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Writes one output charge unit for a molecule to the given path.
///
/// # Errors
///
/// Returns `QboostError::Io` if the file cannot be created or written.
pub fn write_charge_file<M: MoleculeView>(
    molecule: &M,
    charges: &[f64],
    path: &Path,
) -> Result<(), QboostError> {
    let file = fs::File::create(path).map_err(|io_error| QboostError::Io {
        path: path.to_path_buf(),
        source: io_error,
    })?;
    let mut writer = BufWriter::new(file);
    write_charge_data(&mut writer, molecule, charges).map_err(|io_error| QboostError::Io {
        path: path.to_path_buf(),
        source: io_error,
    })
}

/// Writes the charge unit to an arbitrary writer: a header naming the system, the echoed
/// element/coordinate table, and the corrected charges as fixed-width decimals, ten per
/// line.
pub fn write_charge_data<M: MoleculeView>(
    writer: &mut dyn Write,
    molecule: &M,
    charges: &[f64],
) -> std::io::Result<()> {
    writeln!(writer, " QDAT for System : {}", molecule.label().trim())?;
    writeln!(writer, " Atomic coordinates")?;
    for (number, position) in molecule
        .atomic_numbers()
        .iter()
        .zip(molecule.positions())
    {
        writeln!(
            writer,
            "{:4}  {:12.4}{:12.4}{:12.4}",
            number, position[0], position[1], position[2]
        )?;
    }
    writeln!(writer)?;
    writeln!(writer, " Ground state charges")?;
    for (i, charge) in charges.iter().enumerate() {
        write!(writer, "{charge:8.4}")?;
        if (i + 1) % CHARGES_PER_LINE == 0 {
            writeln!(writer)?;
        }
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Molecule, QboostError> {
        parse_xyz(content, Path::new("test/input.xyz"))
    }

    #[test]
    fn test_parse_plain_xyz() {
        let molecule = parse(
            "3\nwater\nO 0.0 0.0 0.117\nH 0.757 0.0 -0.469\nH -0.757 0.0 -0.469\n",
        )
        .unwrap();
        assert_eq!(molecule.elements, vec![8, 1, 1]);
        assert_eq!(molecule.total_charge, 0);
        assert_eq!(molecule.label(), "input");
        assert_eq!(molecule.coordinates[1], [0.757, 0.0, -0.469]);
    }

    #[test]
    fn test_parse_charge_line() {
        let molecule = parse(
            "2\ncomment\nO 0.0 0.0 0.0\nH 0.0 0.0 0.97\n-1 1\n",
        )
        .unwrap();
        assert_eq!(molecule.total_charge, -1);
    }

    #[test]
    fn test_comment_line_with_two_fields_is_not_a_charge() {
        let molecule = parse(
            "1\n42 kcal\nNe 0.0 0.0 0.0\n",
        )
        .unwrap();
        assert_eq!(molecule.total_charge, 0);
    }

    #[test]
    fn test_numeric_element_tokens_and_alias_folding() {
        let molecule = parse(
            "3\ncomment\n6 0.0 0.0 0.0\nSi 0.0 0.0 1.8\n50 0.0 0.0 3.6\n",
        )
        .unwrap();
        assert_eq!(molecule.elements, vec![6, 6, 6]);
    }

    #[test]
    fn test_unknown_element_is_a_parse_error() {
        let result = parse("1\ncomment\nXx 0.0 0.0 0.0\n");
        assert!(matches!(result, Err(QboostError::XyzParse { line: 3, .. })));
    }

    #[test]
    fn test_bad_coordinate_is_a_parse_error() {
        let result = parse("1\ncomment\nC 0.0 zero 0.0\n");
        assert!(matches!(result, Err(QboostError::XyzParse { .. })));
    }

    #[test]
    fn test_empty_file_is_a_parse_error() {
        let result = parse("0\nempty\n");
        assert!(matches!(result, Err(QboostError::XyzParse { .. })));
    }

    #[test]
    fn test_charge_unit_format() {
        let molecule = Molecule::new(
            vec![6, 1],
            vec![[0.0, 0.0, 0.0], [0.0, 0.0, 1.1]],
            0,
            "demo.xyz",
        )
        .unwrap();

        let mut buffer: Vec<u8> = Vec::new();
        write_charge_data(&mut buffer, &molecule, &[0.1234, -0.1234]).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " QDAT for System : demo");
        assert_eq!(lines[1], " Atomic coordinates");
        assert_eq!(lines[2], "   6        0.0000      0.0000      0.0000");
        assert_eq!(lines[3], "   1        0.0000      0.0000      1.1000");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], " Ground state charges");
        assert_eq!(lines[6], "  0.1234 -0.1234");
    }

    #[test]
    fn test_charges_wrap_every_ten_values() {
        let molecule = Molecule::new(
            vec![1; 12],
            vec![[0.0; 3]; 12],
            0,
            "chain.xyz",
        )
        .unwrap();

        let mut buffer: Vec<u8> = Vec::new();
        write_charge_data(&mut buffer, &molecule, &vec![0.05; 12]).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let charge_lines: Vec<&str> = text
            .lines()
            .skip_while(|line| *line != " Ground state charges")
            .skip(1)
            .collect();
        assert_eq!(charge_lines.len(), 2);
        assert_eq!(charge_lines[0].len(), 8 * 10);
        assert_eq!(charge_lines[1].len(), 8 * 2);
    }
}
