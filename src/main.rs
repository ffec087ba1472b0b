use clap::{Parser, Subcommand};
use sourcedown::tags::{DiskTagSink, MemoryTagSink};
use sourcedown::{config, convert, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sourcedown")]
#[command(about = "Convert annotated source articles into markdown posts")]
#[command(long_about = "\
Convert annotated source articles into markdown posts

An article is a host-language source file whose documentation comments carry
the prose and metadata, with optional embedded-language snippet blocks:

  /**
   * @title Finding the minimum of a vector
   * @author Jane Doe
   * @summary Demonstrates how min_element can be used.
   * @license MIT
   * @tags stl featured
   *
   * Body prose starts after the metadata.
   */

  double vecmin(NumericVector x) { ... }      // fenced as host code

  /*** R
  vecmin(x)                                   // fenced as embedded snippet
  */

Conversion produces a post with validated front matter (title, author,
summary, and an exactly-MIT license are required), appends layout and src
fields, and generates an index page under the tags directory for every tag
named in the article.

Site layout (paths configurable via sourcedown.toml):

  site/
  ├── sourcedown.toml              # Config (optional)
  ├── src/                         # Annotated source articles
  │   └── 2013-01-31-sorting.cpp
  ├── _posts/                      # Converted markdown (generated)
  └── tags/                        # Tag index pages (generated)

Run 'sourcedown gen-config' to print a documented sourcedown.toml.")]
#[command(version)]
struct Cli {
    /// Site root directory (where sourcedown.toml lives)
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a single article to a markdown post
    Convert {
        /// Annotated source file (or markdown passthrough)
        input: PathBuf,
        /// Destination path for the normalized post
        output: PathBuf,
    },
    /// Convert every source article into the posts directory
    Build {
        /// Also write a JSON manifest of the converted posts
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Validate all articles without writing anything
    Check,
    /// Print a stock sourcedown.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load_config(&cli.root)?;

    match cli.command {
        Command::Convert { input, output } => {
            let mut sink = DiskTagSink::new(cli.root.join(&config.tags));
            let report = convert::convert_file(&input, Some(&output), &config, &mut sink)?;
            output::print_convert_output(&report);
        }
        Command::Build { manifest } => {
            let mut sink = DiskTagSink::new(cli.root.join(&config.tags));
            let result = convert::build(&cli.root, &config, &mut sink, true)?;
            output::print_build_output(&result, &sink.created);
            if let Some(path) = manifest {
                convert::write_manifest(&path, &result)?;
                println!("Manifest: {}", path.display());
            }
        }
        Command::Check => {
            let mut sink = MemoryTagSink::default();
            let result = convert::build(&cli.root, &config, &mut sink, false)?;
            output::print_build_output(&result, &[]);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
