//! Eligibility UI - command-line driver for the portal's page behaviours.
//!
//! Sends approval decisions to a running portal server and runs the form
//! validation, department filter and tab switching against saved page
//! fixtures.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use futures::stream::{self, StreamExt};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use eligibility_ui::models::{DepartmentFilter, StudentId};
use eligibility_ui::page::{
    self, tabs, ApprovalOutcome, LoggingHost, PageController, SubmitOutcome,
};
use eligibility_ui::{ApiClient, Config, PageSpec};

/// Maximum approval requests in flight at once.
const MAX_CONCURRENT_REQUESTS: usize = 4;

const USAGE: &str = "\
Usage:
  eligibility-ui approve <student_id>... [--reject]
  eligibility-ui validate <page.json> <form-id>
  eligibility-ui filter <page.json> <department|all>
  eligibility-ui tab <page.json> <tab-name>
  eligibility-ui set-cookie <cookie>
  eligibility-ui clear-cookie";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the command succeeded from the user's point of view.
async fn run(args: &[String]) -> Result<bool> {
    let Some((command, rest)) = args.split_first() else {
        eprintln!("{}", USAGE);
        return Ok(false);
    };

    match command.as_str() {
        "approve" => approve(rest).await,
        "validate" => match rest {
            [page, form_id] => validate(Path::new(page), form_id),
            _ => bail!("validate expects <page.json> <form-id>\n{}", USAGE),
        },
        "filter" => match rest {
            [page, department] => filter(Path::new(page), department),
            _ => bail!("filter expects <page.json> <department>\n{}", USAGE),
        },
        "tab" => match rest {
            [page, name] => tab(Path::new(page), name),
            _ => bail!("tab expects <page.json> <tab-name>\n{}", USAGE),
        },
        "set-cookie" => match rest {
            [cookie] => store_session_cookie(Some(cookie.clone())),
            _ => bail!("set-cookie expects <cookie>\n{}", USAGE),
        },
        "clear-cookie" => store_session_cookie(None),
        "-h" | "--help" | "help" => {
            println!("{}", USAGE);
            Ok(true)
        }
        other => bail!("Unknown command '{}'\n{}", other, USAGE),
    }
}

/// Send approval (or rejection, with `--reject`) for each listed student.
async fn approve(args: &[String]) -> Result<bool> {
    let approved = !args.iter().any(|a| a == "--reject");
    let ids = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(|a| {
            a.parse::<StudentId>()
                .with_context(|| format!("Invalid student id '{}'", a))
        })
        .collect::<Result<Vec<_>>>()?;
    if ids.is_empty() {
        bail!("approve expects at least one student id\n{}", USAGE);
    }

    let config = Config::load().context("Failed to load config")?;
    info!(base_url = %config.base_url, count = ids.len(), approved, "Sending approval decisions");
    if config.session_cookie.is_none() {
        warn!("No session cookie configured; the server will refuse approvals");
    }
    let client = ApiClient::from_config(&config)?;

    let outcomes: Vec<(StudentId, ApprovalOutcome)> = stream::iter(ids)
        .map(|id| {
            let client = client.clone();
            async move {
                let mut host = LoggingHost::default();
                let outcome = page::approve_student(&client, &mut host, id, approved).await;
                (id, outcome)
            }
        })
        .buffer_unordered(MAX_CONCURRENT_REQUESTS)
        .collect()
        .await;

    let mut all_ok = true;
    for (id, outcome) in outcomes {
        match outcome {
            ApprovalOutcome::Reloaded => println!("{}: updated", id),
            ApprovalOutcome::Alerted(message) => {
                all_ok = false;
                println!("{}: {}", id, message);
            }
        }
    }
    Ok(all_ok)
}

/// Save (or forget) the admin session cookie sent with approval requests.
/// Reads the stored file directly so environment overrides are not persisted.
fn store_session_cookie(cookie: Option<String>) -> Result<bool> {
    let path = Config::config_path()?;
    let mut config = Config::load_from(&path)?;
    config.set_session_cookie(cookie);
    config.save()?;
    match config.session_cookie {
        Some(_) => info!(path = %path.display(), "Session cookie saved"),
        None => info!(path = %path.display(), "Session cookie cleared"),
    }
    println!("{}", path.display());
    Ok(true)
}

fn load_page(path: &Path) -> Result<PageController> {
    let document = PageSpec::load(path)?.build()?;
    Ok(PageController::load(document))
}

fn validate(path: &Path, form_id: &str) -> Result<bool> {
    let mut controller = load_page(path)?;
    let form = controller
        .document()
        .get_element_by_id(form_id)
        .with_context(|| format!("No element with id '{}' in {}", form_id, path.display()))?;

    let mut host = LoggingHost::default();
    match controller.submit(form, &mut host) {
        SubmitOutcome::Submitted => {
            println!("ok");
            Ok(true)
        }
        SubmitOutcome::Prevented(_) => Ok(false),
    }
}

fn filter(path: &Path, department: &str) -> Result<bool> {
    let mut controller = load_page(path)?;
    let summary = page::apply_department_filter(
        controller.document_mut(),
        &DepartmentFilter::from_value(department),
    );

    let doc = controller.document();
    for table_id in page::filter::STUDENT_TABLE_IDS {
        let Some(table) = doc.get_element_by_id(table_id) else {
            continue;
        };
        for row in doc.descendants_by_tag(table, "tr") {
            if doc.is_visible(row) {
                let dept = doc.attr(row, page::filter::DEPARTMENT_ATTR).unwrap_or("-");
                println!("{}\t{}", table_id, dept);
            }
        }
    }
    eprintln!("{} shown, {} hidden", summary.shown, summary.hidden);
    Ok(true)
}

fn tab(path: &Path, name: &str) -> Result<bool> {
    let mut controller = load_page(path)?;
    controller.show_student_tab(name)?;
    let doc = controller.document();
    for panel in doc.elements_by_class(tabs::TAB_CONTENT_CLASS) {
        let id = doc.element(panel).id.as_deref().unwrap_or("-");
        let state = if doc.is_visible(panel) { "shown" } else { "hidden" };
        println!("{}\t{}", id, state);
    }
    Ok(true)
}
