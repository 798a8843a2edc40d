//! hoa-property CLI - find HOA PDFs and show their metadata

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use hoa_property::config::DEFAULT_ENV_FILE;
use hoa_property::{DocumentFile, PathResolver, Settings};

#[derive(Parser)]
#[command(name = "hoa-property")]
#[command(version)]
#[command(about = "Find HOA PDF documents and show their metadata", long_about = None)]
struct Cli {
    /// Env file with project settings
    #[arg(long, global = true, value_name = "FILE", env = "HOA_ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the PDF files found at a path
    #[command(alias = "ls")]
    List {
        /// PDF file or directory of PDFs
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Show metadata and page counts
    Info {
        /// PDF file or directory of PDFs
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Print loaded documents as JSON
    Json {
        /// PDF file or directory of PDFs
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show the loaded settings
    Config,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let result = match Settings::load(&cli.env_file) {
        Ok(settings) => run(cli.command, &settings),
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(quiet: bool) {
    let default_level = if quiet { "error" } else { "debug" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<8} {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn run(command: Option<Commands>, settings: &Settings) -> CliResult {
    log::debug!("begin run");
    log::debug!("{:?}", settings);

    match command {
        Some(Commands::List { path }) => cmd_list(&path),
        Some(Commands::Info { path }) => cmd_info(&path, settings),
        Some(Commands::Json {
            path,
            output,
            compact,
        }) => cmd_json(&path, output.as_deref(), compact),
        Some(Commands::Config) => {
            cmd_config(settings);
            Ok(())
        }
        None => {
            println!("{}", "Usage: hoa-property <COMMAND> <PATH>".yellow());
            println!("       hoa-property --help for more information");
            Ok(())
        }
    }
}

fn cmd_list(path: &Path) -> CliResult {
    load_documents(path)?;
    Ok(())
}

fn load_documents(path: &Path) -> Result<Vec<DocumentFile>, Box<dyn std::error::Error>> {
    let resolver = PathResolver::new();
    let resolved = resolver.collect(path)?;

    if !resolved.is_directory() {
        return Ok(resolver.load_all(&resolved, |_| {})?);
    }

    let pb = ProgressBar::new(resolved.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let documents = resolver.load_all(&resolved, |file| {
        pb.set_message(
            file.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );
        pb.inc(1);
    });
    pb.finish_and_clear();

    Ok(documents?)
}

fn cmd_info(path: &Path, settings: &Settings) -> CliResult {
    let documents = load_documents(path)?;

    println!(
        "{} {}",
        "Property".cyan().bold(),
        settings.property_name.bold()
    );

    for doc in &documents {
        println!();
        println!("{}", "Document Information".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());

        println!("{}: {}", "File".bold(), doc.path.display());
        println!("{}: PDF {}", "Format".bold(), doc.version);
        println!("{}: {}", "Pages".bold(), doc.page_count());
        println!(
            "{}: {}",
            "Encrypted".bold(),
            if doc.encrypted { "Yes" } else { "No" }
        );

        if doc.metadata.is_empty() {
            println!("{}", "No document information".dimmed());
        }
        for (key, value) in doc.metadata.iter() {
            println!("{}: {}", key.bold(), value);
        }
    }

    println!(
        "\n{} {} document(s)",
        "Done!".green().bold(),
        documents.len()
    );
    Ok(())
}

fn cmd_json(path: &Path, output: Option<&Path>, compact: bool) -> CliResult {
    let documents = load_documents(path)?;

    let json = if compact {
        serde_json::to_string(&documents)?
    } else {
        serde_json::to_string_pretty(&documents)?
    };

    if let Some(out) = output {
        fs::write(out, &json)?;
        println!("{} {}", "Saved to".green(), out.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_config(settings: &Settings) {
    println!("{}", "Settings".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let unset = || "(unset)".dimmed().to_string();
    println!(
        "{}: {}",
        "Project".bold(),
        settings.project_name.clone().unwrap_or_else(unset)
    );
    println!(
        "{}: {}",
        "Environment".bold(),
        settings.environment.clone().unwrap_or_else(unset)
    );
    println!("{}: {}", "Property".bold(), settings.property_name);
}
