use clap::Parser;

/// The catalog is driven entirely through the interactive menu; the
/// command line only carries `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(name = "bookcat", version)]
#[command(
    about = "Keep a small library catalog in a local JSON file",
    long_about = "Keep a small library catalog in a local JSON file.\n\n\
                  Books are stored in ./library.json unless ./bookcat.json \
                  names another data_file. Run without arguments to open the menu."
)]
pub struct Cli {}
