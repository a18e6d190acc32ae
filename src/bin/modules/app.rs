use super::cli::Cli;
use super::error::CliError;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use prettytable::{format, row, Table};
use qboost::{
    get_default_settings, io, ChargePipeline, GbdtEnsemble, Molecule, MoleculeView,
    PredictionResult, Settings,
};

pub fn run(args: Cli) -> Result<(), CliError> {
    let settings = if let Some(settings_path) = &args.calculation.settings {
        Settings::load_from_file(settings_path)?
    } else {
        get_default_settings().clone()
    };

    let first_stage = GbdtEnsemble::load_from_file(&args.models.model1)?;
    let second_stage = GbdtEnsemble::load_from_file(&args.models.model2)?;

    let paths = if let Some(directory) = &args.directory {
        io::collect_xyz_paths(directory)?
    } else {
        args.files.clone()
    };

    let (molecules, skipped) = io::read_molecules(&paths);
    for (path, error) in &skipped {
        warn!("skipping '{}': {}", path.display(), error);
    }
    if molecules.is_empty() {
        return Err(CliError::NoValidInput);
    }

    let pipeline = ChargePipeline::new(&first_stage, &second_stage).with_settings(settings);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Predicting partial charges...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = pipeline.predict(&molecules)?;

    pb.finish_and_clear();

    for (index, molecule) in molecules.iter().enumerate() {
        let output_path = molecule.source.with_extension(io::CHARGE_FILE_EXTENSION);
        io::write_charge_file(molecule, result.molecule_charges(index), &output_path)?;
    }

    print_summary(&molecules, &result);
    info!(
        "{} charges in {} molecules have been calculated",
        result.charges.len(),
        molecules.len()
    );

    Ok(())
}

fn print_summary(molecules: &[Molecule], result: &PredictionResult) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row![bc->"Molecule", bc->"Atoms", bc->"Declared Q", bc->"Corrected Sum"]);

    for (index, molecule) in molecules.iter().enumerate() {
        let corrected_sum: f64 = result.molecule_charges(index).iter().sum();
        table.add_row(row![
            l->molecule.label(),
            r->molecule.atom_count(),
            r->molecule.total_charge,
            r->format!("{corrected_sum:.4}")
        ]);
    }

    table.printstd();
}
