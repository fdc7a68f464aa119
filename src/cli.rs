//! Command-line front end.
//!
//! Flags map one-to-one onto [`MemberSearchCondition`] fields; an omitted
//! flag is an absent criterion. [`run`] writes to any `io::Write` so the
//! harnesses can capture output.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use qfilter_core::config::{Config, OutputFormat};
use qfilter_core::{
    InMemoryStore, MemberQuery, MemberSearchCondition, MemberTeamRow, OrderBy, Page, PageRequest,
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "qfilter", about = "Search members with optional, composable criteria")]
pub struct Cli {
    /// Config file to layer over the built-in defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level to stderr (RUST_LOG takes precedence).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a search and print matching members.
    Search(SearchArgs),
    /// Print the predicate a condition translates to, without running it.
    Explain(ConditionArgs),
}

#[derive(Debug, Args)]
pub struct ConditionArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub team_name: Option<String>,
    /// Inclusive lower bound on age.
    #[arg(long)]
    pub age_goe: Option<i64>,
    /// Inclusive upper bound on age.
    #[arg(long)]
    pub age_loe: Option<i64>,
}

impl ConditionArgs {
    pub fn to_condition(&self) -> MemberSearchCondition {
        MemberSearchCondition::from_parts(
            self.username.clone(),
            self.team_name.clone(),
            self.age_goe,
            self.age_loe,
        )
    }
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub condition: ConditionArgs,

    /// JSON dataset to search instead of the configured one.
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Page size; defaults to `query.default_page_size`.
    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(long, value_enum, default_value_t = OrderArg::Id)]
    pub order: OrderArg,

    /// Print JSON regardless of `output.format`.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Id,
    UsernameDesc,
    AgeDesc,
}

impl From<OrderArg> for OrderBy {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Id => OrderBy::MemberIdAsc,
            OrderArg::UsernameDesc => OrderBy::UsernameDesc,
            OrderArg::AgeDesc => OrderBy::AgeDescUsernameAsc,
        }
    }
}

/// Resolve the config named on the command line, or the user default.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Config::load().context("loading user config"),
    }
}

pub fn run(cli: &Cli, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    match &cli.command {
        Command::Explain(args) => {
            let predicate = args.to_condition().to_predicate()?;
            writeln!(out, "{predicate}")?;
        }
        Command::Search(args) => search(args, config, out)?,
    }
    Ok(())
}

fn search(args: &SearchArgs, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    // Reject the condition before touching the dataset.
    let predicate = args.condition.to_condition().to_predicate()?;

    let limit = args.limit.unwrap_or(config.query.default_page_size);
    if limit == 0 || limit > config.query.max_page_size {
        anyhow::bail!(
            "--limit must be between 1 and {} (got {limit})",
            config.query.max_page_size
        );
    }

    let store = match args.dataset.as_ref().or(config.dataset.path.as_ref()) {
        Some(path) => InMemoryStore::load(path)
            .with_context(|| format!("loading dataset {}", path.display()))?,
        None => InMemoryStore::sample(),
    };

    let request = PageRequest::new(args.offset, limit).ordered(args.order.into());
    let page = store.search_page(&predicate, request);
    tracing::info!(
        %predicate,
        total = page.total,
        returned = page.rows.len(),
        "search complete"
    );

    let format = if args.json { OutputFormat::Json } else { config.output.format };
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &page)?;
            writeln!(out)?;
        }
        OutputFormat::Table => write_table(&predicate.to_string(), &page, out)?,
    }
    Ok(())
}

fn write_table(
    predicate: &str,
    page: &Page<MemberTeamRow>,
    out: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(out, "where {predicate}")?;
    writeln!(out, "{:<6} {:<16} {:>4}  {}", "id", "username", "age", "team")?;
    for row in &page.rows {
        writeln!(
            out,
            "{:<6} {:<16} {:>4}  {}",
            row.member_id,
            row.username,
            row.age,
            row.team_name.as_deref().unwrap_or("-")
        )?;
    }
    writeln!(
        out,
        "{} of {} (offset {})",
        page.rows.len(),
        page.total,
        page.offset
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
