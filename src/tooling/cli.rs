//! CLI Tooling
//!
//! Command-line interface over the explorer core: parse and render
//! structure listings, generate listings from directories, summarize, and
//! fetch from the backend.

use crate::api::StructureClient;
use crate::config::{AetherConfig, ConfigLoader};
use crate::error::ApiError;
use crate::explorer::ExplorerState;
use crate::language::Language;
use crate::listing::{self, ListingConfig};
use crate::logging::LoggingConfig;
use crate::tooling::format::{format_language_text, format_summary_text};
use crate::tree::{IndentedTreeParser, RenderFormat, Tree, TreeRenderer};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// aethertree - repository structure parser and file-tree renderer
#[derive(Parser)]
#[command(name = "aethertree")]
#[command(about = "Parse indented repository listings and render them as file trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging settings with command-line flags applied over `base`.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a structure listing and print the tree as JSON (input order)
    Parse {
        /// Listing file, or "-" for stdin
        input: PathBuf,
    },
    /// Render a structure listing as a folders-first file tree
    Render {
        /// Listing file, or "-" for stdin
        input: PathBuf,
        /// Output format (html, text, json); defaults to config
        #[arg(long)]
        format: Option<String>,
        /// Disable ANSI colors in text output
        #[arg(long)]
        no_color: bool,
    },
    /// Generate a structure listing from a directory
    List {
        /// Directory to list
        dir: PathBuf,
        /// Maximum number of files before truncation markers
        #[arg(long)]
        max_files: Option<usize>,
        /// Spaces per nesting level
        #[arg(long)]
        indent: Option<usize>,
        /// Omit the "Repository structure:" header
        #[arg(long)]
        no_header: bool,
    },
    /// Summarize a structure listing (counts and top extensions)
    Summary {
        /// Listing file, or "-" for stdin
        input: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Number of extensions to show
        #[arg(long, default_value = "10")]
        top: usize,
    },
    /// Fetch the structure from the backend and render it
    Fetch {
        /// Backend base URL; defaults to config
        #[arg(long)]
        base_url: Option<String>,
        /// Output format (html, text, json); defaults to config
        #[arg(long)]
        format: Option<String>,
    },
    /// Show language, editor mode and runner for a file name
    Language {
        /// File name or path
        file: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Parse { .. } => "parse",
        Commands::Render { .. } => "render",
        Commands::List { .. } => "list",
        Commands::Summary { .. } => "summary",
        Commands::Fetch { .. } => "fetch",
        Commands::Language { .. } => "language",
    }
}

/// CLI context: configuration shared by all commands.
pub struct CliContext {
    config: AetherConfig,
}

impl CliContext {
    /// Create a new CLI context, loading configuration.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self { config })
    }

    /// Create a context from an already-built configuration.
    pub fn with_config(config: AetherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AetherConfig {
        &self.config
    }

    /// Execute a command, returning the text to print.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Parse { input } => {
                let tree = self.parse_input(input)?;
                Ok(serde_json::to_string_pretty(&tree)?)
            }
            Commands::Render {
                input,
                format,
                no_color,
            } => {
                let tree = self.parse_input(input)?;
                let renderer = self.renderer(format.as_deref())?;
                let renderer = if *no_color {
                    renderer.with_color(false)
                } else {
                    renderer
                };
                Ok(renderer.render(&tree))
            }
            Commands::List {
                dir,
                max_files,
                indent,
                no_header,
            } => {
                let config = ListingConfig {
                    max_files: max_files.unwrap_or(self.config.listing.max_files),
                    indent_width: indent.unwrap_or(self.config.listing.indent_width),
                    header: self.config.listing.header && !no_header,
                    ignore_names: self.config.listing.ignore_names.clone(),
                };
                listing::generate(dir, &config)
            }
            Commands::Summary { input, format, top } => {
                let stats = self.parse_input(input)?.stats();
                match format.as_str() {
                    "json" => Ok(serde_json::to_string_pretty(&json!({
                        "files": stats.files,
                        "folders": stats.folders,
                        "max_depth": stats.max_depth,
                        "extensions": stats
                            .top_extensions(*top)
                            .iter()
                            .map(|(ext, count)| json!({ "extension": ext, "files": count }))
                            .collect::<Vec<_>>(),
                    }))?),
                    "text" => Ok(format_summary_text(&stats, *top)),
                    other => Err(invalid_text_json(other)),
                }
            }
            Commands::Fetch { base_url, format } => {
                let mut api = self.config.api.clone();
                if let Some(url) = base_url {
                    api.base_url = url.clone();
                }
                let renderer = self.renderer(format.as_deref())?;
                let client = StructureClient::new(&api)?;
                let runtime = tokio::runtime::Runtime::new()
                    .map_err(|e| ApiError::ConfigError(format!("Failed to start runtime: {}", e)))?;

                let mut state = ExplorerState::new(self.parser());
                runtime.block_on(state.refresh(&client));
                Ok(state.render(&renderer))
            }
            Commands::Language { file, format } => {
                let language = Language::from_file_name(file);
                match format.as_str() {
                    "json" => Ok(serde_json::to_string_pretty(&json!({
                        "language": language,
                        "editor_mode": language.editor_mode(),
                        "execution": language.execution(),
                    }))?),
                    "text" => Ok(format_language_text(language)),
                    other => Err(invalid_text_json(other)),
                }
            }
        }
    }

    fn parser(&self) -> IndentedTreeParser {
        IndentedTreeParser::new(self.config.parser.clone())
    }

    fn renderer(&self, format: Option<&str>) -> Result<TreeRenderer, ApiError> {
        let renderer = TreeRenderer::new(self.config.render.clone());
        match format {
            Some(format) => Ok(renderer.with_format(format.parse::<RenderFormat>()?)),
            None => Ok(renderer),
        }
    }

    fn parse_input(&self, input: &Path) -> Result<Tree, ApiError> {
        let bytes = read_input(input)?;
        Ok(self.parser().parse_bytes(&bytes)?)
    }
}

fn read_input(input: &Path) -> Result<Vec<u8>, ApiError> {
    if input.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| ApiError::io("<stdin>", e))?;
        return Ok(buf);
    }
    std::fs::read(input).map_err(|e| ApiError::io(input, e))
}

fn invalid_text_json(format: &str) -> ApiError {
    ApiError::InvalidArgument(format!(
        "Invalid output format: {} (must be 'text' or 'json')",
        format
    ))
}
