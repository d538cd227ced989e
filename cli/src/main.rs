use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use idl_conv_compiler::error::ConvError;
use idl_conv_compiler::{convert_to_proto, convert_to_struct, parse_source, RenderOptions};

#[derive(Parser)]
#[command(name = "idlconv")]
#[command(about = "Convert Go-style struct declarations to tagged structs or protobuf messages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a `.proto` file with one message per struct
    Proto {
        /// Input file with `type X struct { ... }` blocks (reads stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output `.proto` file (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Package name for the `package` statement
        #[arg(short, long)]
        package: Option<String>,
    },

    /// Re-emit the structs with generated serialization tags
    Tags {
        /// Input file (reads stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Package name for the `package` clause
        #[arg(short, long)]
        package: Option<String>,

        /// Tag key to generate, e.g. `json` or `yaml`
        #[arg(short, long, default_value = "json")]
        tag: String,
    },

    /// Print the parsed struct descriptions as JSON
    Dump {
        /// Input file (reads stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn read_input(input: Option<&Path>) -> Result<String, ConvError> {
    match input {
        Some(path) => {
            debug!(path = %path.display(), "reading input");
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn write_output(output: Option<&Path>, text: &str) -> Result<(), ConvError> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            info!("Output written to {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn options(package: Option<&str>) -> RenderOptions {
    let opts = RenderOptions::default();
    match package {
        Some(p) => opts.with_package(p),
        None => opts,
    }
}

fn main() -> Result<(), ConvError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "idlconv=info,idl_conv_compiler=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Proto { input, output, package } => {
            let text = read_input(input.as_deref())?;
            let proto = convert_to_proto(&text, &options(package.as_deref()))?;
            write_output(output.as_deref(), &proto)
        }

        Commands::Tags { input, output, package, tag } => {
            let text = read_input(input.as_deref())?;
            let opts = options(package.as_deref()).with_tag_key(tag.clone());
            let structs = convert_to_struct(&text, &opts)?;
            write_output(output.as_deref(), &structs)
        }

        Commands::Dump { input } => {
            let text = read_input(input.as_deref())?;
            let structs = parse_source(&text)?;
            let json = serde_json::to_string_pretty(&structs).map_err(io::Error::from)?;
            println!("{}", json);
            Ok(())
        }
    }
}
