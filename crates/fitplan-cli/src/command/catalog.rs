use std::path::PathBuf;

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct CatalogArg {
    /// Catalog JSON file to validate and print (built-in table if omitted)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CatalogArg) -> anyhow::Result<()> {
    let CatalogArg { catalog, output } = arg;
    let catalog = util::load_catalog(catalog.as_ref())?;
    eprintln!("Catalog has {} exercises", catalog.len());
    Output::save_json(&catalog, output.clone())
}
