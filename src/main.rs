// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! netcapt CLI - issue requests through the capture layer and read the log

use std::env;
use std::process::ExitCode;

use netcapt::{Debugger, HttpClient, Request};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("netcapt=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "fetch" => {
            if args.len() < 3 {
                eprintln!("Usage: netcapt fetch <url>");
                return ExitCode::from(1);
            }
            send(Request::get(&args[2])).await
        }
        "post" => {
            if args.len() < 4 {
                eprintln!("Usage: netcapt post <url> <body>");
                return ExitCode::from(1);
            }
            let request = Request::post(&args[2]).map(|r| {
                let r = r.body(args[3].clone());
                if args[3].trim_start().starts_with(['{', '[']) {
                    r.header("content-type", "application/json")
                } else {
                    r
                }
            });
            send(request).await
        }
        "log" => show_log(),
        "path" => {
            match Debugger::global().log_path() {
                Some(path) => println!("{}", path.display()),
                None => println!("(no log file)"),
            }
            ExitCode::SUCCESS
        }
        "clear" => match Debugger::global().clear_log() {
            Ok(()) => {
                println!("Log cleared");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to clear log: {}", e);
                ExitCode::from(1)
            }
        },
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("netcapt {}", netcapt::VERSION);
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"netcapt - Transparent HTTP capture for debugging

USAGE:
    netcapt <COMMAND> [OPTIONS]

COMMANDS:
    fetch <url>          GET a URL through the capture layer
    post <url> <body>    POST a body through the capture layer
    log                  Print the captured request log
    path                 Print the log file location
    clear                Empty the log file
    help                 Show this help message
    version              Show version information

ENVIRONMENT:
    NETCAPT_LOG_FILE     Log file to use
    NETCAPT_LOG_DIR      Directory for the ApiLogs file
    RUST_LOG             Diagnostic output filter (default: netcapt=info)

EXAMPLES:
    netcapt fetch https://jsonplaceholder.typicode.com/posts
    netcapt post https://reqres.in/api/users '{{"name":"John Doe","job":"Tester"}}'
    netcapt log
"#
    );
}

async fn send(request: netcapt::Result<Request>) -> ExitCode {
    let request = match request {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid request: {}", e);
            return ExitCode::from(1);
        }
    };

    let debugger = Debugger::global();
    debugger.enable();

    let client = match HttpClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return ExitCode::from(1);
        }
    };

    println!("{} {}", request.method, request.url);

    match client.execute(request).await {
        Ok(response) => {
            println!("\n=== Response ===");
            println!("Status: {}", response.status);
            println!("URL: {}", response.url);
            println!("Content-Type: {:?}", response.content_type());
            println!("Size: {} bytes", response.body_len());
            println!("Time: {}ms", response.elapsed.as_millis());

            if let Some(path) = debugger.log_path() {
                println!("\nLogged to {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Request failed: {}", e);
            ExitCode::from(1)
        }
    }
}

fn show_log() -> ExitCode {
    match Debugger::global().read_log() {
        Ok(contents) if contents.is_empty() => {
            println!("(log is empty)");
            ExitCode::SUCCESS
        }
        Ok(contents) => {
            print!("{}", contents);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to read log: {}", e);
            ExitCode::from(1)
        }
    }
}
