//! doc-assist: one-shot CLI for the RAG document backend.
//! Reads config, then runs one operation: `list`, `upload <path>`, or
//! `ask <question>` (the question may also come from stdin).

use doc_assist_client::{config, Client};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

fn resolve_config_path(args: &[String]) -> PathBuf {
    // 1. --config <path> flag
    if let Some(pos) = args.iter().position(|a| a == "--config") {
        if let Some(path) = args.get(pos + 1) {
            return PathBuf::from(path);
        }
    }
    // 2. DOC_ASSIST_CONFIG env var
    if let Ok(val) = std::env::var("DOC_ASSIST_CONFIG") {
        return PathBuf::from(val);
    }
    // 3. Default path (~/.doc-assist/config.yaml)
    config::default_config_path().unwrap_or_else(|| {
        eprintln!("Error: unable to determine config path (set --config or DOC_ASSIST_CONFIG)");
        process::exit(1);
    })
}

/// Positional arguments, with the `--config <path>` pair stripped out.
fn positional_args(args: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args.iter().skip(1) {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--config" {
            skip_next = true;
            continue;
        }
        out.push(arg.clone());
    }
    out
}

fn read_question_from_stdin() -> String {
    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line).unwrap_or(0);
    line.trim().to_string()
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let config_path = resolve_config_path(&args);

    let cfg = match config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!(
                "Error: failed to load config from {}: {}",
                config_path.display(),
                e
            );
            process::exit(1);
        }
    };

    let base_url = match cfg.require_base_url() {
        Ok(url) => url.to_string(),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let positionals = positional_args(&args);

    // Run the async operation on a tokio runtime.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Error: failed to create runtime: {}", e);
            process::exit(1);
        });

    rt.block_on(async {
        let client = Client::new(base_url);

        match positionals.first().map(String::as_str) {
            Some("list") => run_list(&client).await,
            Some("upload") => {
                let path = positionals.get(1).cloned().unwrap_or_else(|| {
                    eprintln!("Error: usage: doc-assist upload <path>");
                    process::exit(1);
                });
                run_upload(&client, PathBuf::from(path)).await;
            }
            Some("ask") => {
                let question = positionals[1..].join(" ");
                let question = if question.trim().is_empty() {
                    read_question_from_stdin()
                } else {
                    question
                };
                run_ask(&client, &question).await;
            }
            // Bare words are the question; no args reads it from stdin.
            Some(_) => {
                let question = positionals.join(" ");
                run_ask(&client, &question).await;
            }
            None => {
                let question = read_question_from_stdin();
                run_ask(&client, &question).await;
            }
        }
    });
}

async fn run_list(client: &Client) {
    let documents = match client.list_documents().await {
        Ok(docs) => docs,
        Err(e) => {
            eprintln!("Error: failed to load documents: {}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if documents.is_empty() {
        let _ = writeln!(out, "No documents found");
    } else {
        for doc in &documents {
            let _ = writeln!(out, "{}", doc.filename);
        }
    }
}

async fn run_upload(client: &Client, path: PathBuf) {
    if let Err(e) = client.upload_file(&path).await {
        eprintln!("Error: upload failed: {}", e);
        process::exit(1);
    }
    println!("Uploaded {}", path.display());
}

async fn run_ask(client: &Client, question: &str) {
    if question.trim().is_empty() {
        eprintln!("Error: no question provided");
        process::exit(1);
    }

    let answer = match client.ask(question).await {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: failed to get answer: {}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = writeln!(out, "{}", answer.answer);
    if !answer.sources.is_empty() {
        let _ = writeln!(out, "\nSources:");
        for src in &answer.sources {
            let _ = writeln!(out, "  {}", src.source);
        }
    }
}
