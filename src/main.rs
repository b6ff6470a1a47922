use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use tspweb::domain::models::{DEFAULT_INSTANCE, DEFAULT_SEED, DEFAULT_TIME_LIMIT};
use tspweb::{
    ClientConfig, ConsoleDisplay, Endpoint, HttpSolverGateway, SolveInput, SolveMethod,
    SolveOutcome, SolveRequestController,
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tspweb=info")),
        )
        .init();

    match run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);

    let first = match args.next() {
        Some(arg) => arg,
        None => {
            print_usage();
            return Ok(ExitCode::FAILURE);
        }
    };

    if first == "methods" {
        print_methods();
        return Ok(ExitCode::SUCCESS);
    }

    // The backend endpoint must be usable before anything else runs.
    let endpoint = Endpoint::parse(&first)?;

    let instance = args.next().unwrap_or_else(|| DEFAULT_INSTANCE.to_string());
    let method: SolveMethod = args
        .next()
        .unwrap_or_else(|| "GREEDY".to_string())
        .parse()?;
    // Time limit and seed stay raw text so the controller's validation sees
    // exactly what the user typed.
    let time_limit = args.next().unwrap_or_else(|| DEFAULT_TIME_LIMIT.to_string());
    let seed = args.next().unwrap_or_else(|| DEFAULT_SEED.to_string());

    let gateway = Arc::new(HttpSolverGateway::new(ClientConfig::new(endpoint.clone())));
    let display = Arc::new(ConsoleDisplay::new());
    let mut controller =
        SolveRequestController::new(endpoint.clone(), gateway.clone(), display);

    controller.instance_changed(&instance);

    let input = SolveInput {
        instance,
        method,
        time_limit,
        seed,
    };

    match controller.solve_requested(&input).await {
        SolveOutcome::Completed(completion) => {
            if completion.is_success() {
                if !completion.body.is_empty() {
                    println!("\n{}", completion.body);
                }
                save_solution_plot(&gateway, &endpoint, &input.instance).await;
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("backend answered {}: {}", completion.status, completion.body);
                Ok(ExitCode::FAILURE)
            }
        }
        SolveOutcome::Rejected(err) => {
            eprintln!("rejected: {}", err);
            Ok(ExitCode::FAILURE)
        }
        SolveOutcome::Failed(err) => {
            eprintln!("transport failure: {}", err);
            Ok(ExitCode::FAILURE)
        }
        SolveOutcome::Busy => Ok(ExitCode::FAILURE),
    }
}

/// Best effort: pull the rendered solution plot and leave it next to the user.
async fn save_solution_plot(gateway: &HttpSolverGateway, endpoint: &Endpoint, instance: &str) {
    let url = endpoint.solved_plot_url(instance, rand::random());
    match gateway.fetch_plot(&url).await {
        Ok(bytes) => {
            let stem = instance.split('.').next().unwrap_or(instance);
            let path = format!("{}_solution.jpg", stem);
            match std::fs::write(&path, bytes) {
                Ok(()) => println!("Solution plot saved to {}", path),
                Err(err) => tracing::warn!(%err, "could not save solution plot"),
            }
        }
        Err(err) => tracing::warn!(%err, "could not fetch solution plot"),
    }
}

fn print_usage() {
    eprintln!("Usage: tspweb-client <endpoint> [instance] [method] [time-limit] [seed]");
    eprintln!("       tspweb-client methods");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  tspweb-client http://127.0.0.1:8080 att48.tsp GREEDY 100 123");
}

fn print_methods() {
    println!("Available solve methods:\n");
    for method in SolveMethod::all() {
        println!("  {:18} {}", method.wire_id(), method.description());
    }
}
