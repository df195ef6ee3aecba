mod palette;
mod placeholder;
mod telemetry;
mod writer;

use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Generate SVG avatar placeholders with initials")]
struct Opt {
    #[structopt(parse(from_os_str), help = "Directory to write placeholders into")]
    output_dir: PathBuf,

    #[structopt(required = true, help = "Names to generate placeholders for")]
    names: Vec<String>,

    #[structopt(short, long, help = "Print debug messages")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    telemetry::register_telemetry(if opt.verbose { "debug" } else { "info" });

    let summary = writer::write_placeholders(&opt.output_dir, &opt.names[..])?;

    println!(
        "Generated {} SVG placeholders in {}",
        summary.files.len(),
        summary.output_dir.display()
    );

    Ok(())
}
