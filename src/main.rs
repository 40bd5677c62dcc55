use anyhow::Result;
use clap::{Parser, Subcommand};
use vit::areas::repository::Repository;
use vit::commands::plumbing::cat_file::CatFileMode;

#[derive(Parser)]
#[command(
    name = "vit",
    version = "0.1.0",
    about = "A minimal content-addressed version control core",
    long_about = "This is a minimal version control tool built around a \
    content-addressed object store. It is not meant to be a full replacement \
    for git, but rather a small core exposing the object database directly.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "hash-object",
        about = "Store a file as a blob object and print its id",
        long_about = "This command stores the file at the given path as a blob object \
        in the object database and prints the resulting object id."
    )]
    HashObject {
        #[arg(index = 1, help = "The file to store")]
        file: String,
    },
    #[command(
        name = "cat-file",
        about = "Print a stored object's kind, size or payload",
        long_about = "This command reads an object from the object database and prints \
        the projection selected by exactly one of -t, -s and -p."
    )]
    CatFile {
        #[arg(short = 't', group = "mode", help = "Print the object's kind")]
        kind: bool,
        #[arg(short = 's', group = "mode", help = "Print the payload size in bytes")]
        size: bool,
        #[arg(short = 'p', group = "mode", help = "Print the raw payload bytes")]
        payload: bool,
        #[arg(index = 1, help = "The object id to inspect")]
        object: String,
    },
    #[command(
        name = "write-tree",
        about = "Snapshot the current directory's files as a tree object",
        long_about = "This command stores every immediate regular file of the current \
        directory as a blob, writes a tree object referencing them and prints the \
        tree's object id. Subdirectories are not recorded."
    )]
    WriteTree,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => repository_in_current_dir()?,
            };

            repository.init()?
        }
        Commands::HashObject { file } => {
            let mut repository = repository_in_current_dir()?;

            repository.hash_object(file)?
        }
        Commands::CatFile {
            kind,
            size,
            payload,
            object,
        } => {
            let mode = match (*kind, *size, *payload) {
                (true, false, false) => CatFileMode::Kind,
                (false, true, false) => CatFileMode::Size,
                (false, false, true) => CatFileMode::Payload,
                _ => anyhow::bail!("cat-file requires exactly one of -t, -s and -p"),
            };
            let mut repository = repository_in_current_dir()?;

            repository.cat_file(object, mode)?
        }
        Commands::WriteTree => {
            let mut repository = repository_in_current_dir()?;

            repository.write_tree()?
        }
    }

    Ok(())
}

fn repository_in_current_dir() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))
}
