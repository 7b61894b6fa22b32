//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::Result;
use std::io::{self, Write};

use super::args::{AskArgs, DepsArgs, InfoArgs, NameArgs};
use crate::app::App;
use crate::domain::QueryKind;
use crate::output::{self, OutputConfig, OutputMode};
use crate::session::Session;

fn new_session(app: &App, output_mode: OutputMode) -> Result<Session<'_>> {
    Ok(Session::new(
        app.graph(),
        app.explainer(),
        OutputConfig::from_env(),
        output_mode,
    )?)
}

/// Execute the ask command
///
/// With a question, answers it and returns. Otherwise reads questions from
/// stdin until `quit` or end of input.
pub async fn execute_ask(app: &App, args: &AskArgs, output_mode: OutputMode) -> Result<()> {
    let session = new_session(app, output_mode)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.question {
        Some(question) => {
            session.ask(question, &mut out).await?;
        }
        None => {
            let stdin = io::stdin();
            session.run(stdin.lock(), &mut out).await?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Execute the deps command
pub async fn execute_deps(app: &App, args: &DepsArgs, output_mode: OutputMode) -> Result<()> {
    let kind = if args.indirect {
        QueryKind::Indirect
    } else {
        QueryKind::Direct
    };
    answer(app, kind, &args.name, output_mode).await
}

/// Execute the users command
pub async fn execute_users(app: &App, args: &NameArgs, output_mode: OutputMode) -> Result<()> {
    answer(app, QueryKind::Users, &args.name, output_mode).await
}

/// Execute the show command
pub async fn execute_show(app: &App, args: &NameArgs, output_mode: OutputMode) -> Result<()> {
    answer(app, QueryKind::Overview, &args.name, output_mode).await
}

async fn answer(app: &App, kind: QueryKind, name: &str, output_mode: OutputMode) -> Result<()> {
    let session = new_session(app, output_mode)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.answer(kind, name, &mut out).await?;
    out.flush()?;
    Ok(())
}

/// Execute the suggest command
pub async fn execute_suggest(app: &App, args: &NameArgs, output_mode: OutputMode) -> Result<()> {
    let suggestions = app.graph().suggest(&args.name);

    match output_mode {
        OutputMode::Json => output::print_json(&suggestions)?,
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let title = format!(
                "Names similar to '{}'",
                output::info(&args.name, &config)
            );
            output::write_section(&mut out, &title, &suggestions, &config)?;
        }
    }

    Ok(())
}

/// Execute the info command
pub async fn execute_info(app: &App, _args: &InfoArgs, output_mode: OutputMode) -> Result<()> {
    let config = app.config();
    let graph = app.graph();
    let explain_model = app.explainer().map(|_| config.explain.model.as_str());

    match output_mode {
        OutputMode::Json => {
            output::print_json(&serde_json::json!({
                "input_path": app.input_path().display().to_string(),
                "delimiter": config.input.delimiter,
                "encoding": config.input.encoding,
                "headers": app.headers(),
                "names": graph.node_count(),
                "dependencies": graph.edge_count(),
                "skipped_records": app.warning_count(),
                "explain_model": explain_model,
            }))?;
        }
        OutputMode::Text => {
            println!("Tablegraph Input Information");
            println!("============================");
            println!();
            println!("Input:        {}", app.input_path().display());
            println!(
                "Format:       delimiter '{}', {}",
                config.input.delimiter, config.input.encoding
            );
            if let Some(headers) = app.headers() {
                println!("Headers:      {}", headers.join(", "));
            }
            println!();
            println!(
                "Graph: {} names, {} dependencies ({} records skipped)",
                graph.node_count(),
                graph.edge_count(),
                app.warning_count()
            );
            match explain_model {
                Some(model) => println!("Explanations: {model} at {}", config.explain.base_url),
                None => println!("Explanations: disabled"),
            }
        }
    }

    Ok(())
}
