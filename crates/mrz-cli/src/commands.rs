use anyhow::{Context, Result};
use tracing::{debug, info};

use mrz_cli::encode::{EncodeOptions, encode_output};
use mrz_cli::record::assemble_record;
use mrz_cli::summary::doc_types_table;
use mrz_core::check_digit::check_digit;
use mrz_core::{OutputMode, normalize};
use mrz_standards::{Catalog, resolve_reference_data};

use crate::cli::{CheckDigitArgs, Cli, EncodeArgs, NormalizeArgs};

pub fn load_catalog(cli: &Cli) -> Result<Catalog> {
    let reference =
        resolve_reference_data(cli.reference_data.as_deref()).context("load reference data")?;
    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path, &reference)
            .with_context(|| format!("load catalog: {}", path.display()))?,
        None => Catalog::builtin(&reference).context("build document type catalog")?,
    };
    info!(
        document_types = catalog.len(),
        countries = reference.countries.len(),
        "catalog ready"
    );
    Ok(catalog)
}

pub fn run_encode(cli: &Cli, args: &EncodeArgs) -> Result<()> {
    let catalog = load_catalog(cli)?;
    let record = assemble_record(args.record.as_deref(), args.overrides())?;
    let options = EncodeOptions {
        mode: if args.markup {
            OutputMode::Markup
        } else {
            OutputMode::Text
        },
        show_fields: args.show_fields,
        json: args.json,
    };
    print!("{}", encode_output(&catalog, &record, &options)?);
    Ok(())
}

pub fn run_doc_types(cli: &Cli) -> Result<()> {
    let catalog = load_catalog(cli)?;
    println!("{}", doc_types_table(&catalog));
    Ok(())
}

pub fn run_check_digit(args: &CheckDigitArgs) {
    debug!(length = args.text.len(), "computing check digit");
    println!("{}", check_digit(&args.text));
}

pub fn run_normalize(args: &NormalizeArgs) {
    println!("{}", normalize(&args.text, args.width, !args.markup));
}
