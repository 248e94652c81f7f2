use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Portfolio catalog: REST server and filtering client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the server, for client commands (default: FOLIO_URL
    /// or http://127.0.0.1:5000)
    #[arg(long, global = true)]
    pub url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Listen port (overrides FOLIO_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Data directory (overrides FOLIO_DATA_DIR)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Fetch all items and show them, filtered locally
    #[command(alias = "ls")]
    List {
        /// Substring to search for in title, description, and details
        #[arg(short, long)]
        search: Option<String>,

        /// Only show one type: Project, Certificate, or Skill
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },

    /// Create a new item
    Add {
        /// Item title
        title: String,

        /// Project, Certificate, or Skill
        #[arg(value_name = "TYPE")]
        kind: String,

        /// Short description
        description: String,

        /// Optional longer details
        details: Option<String>,
    },

    /// Delete an item by id
    #[command(alias = "rm")]
    Remove {
        /// Item id as shown by `folio list`
        id: String,
    },
}
