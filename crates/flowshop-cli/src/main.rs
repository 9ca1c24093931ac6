// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use flowshop_model::prelude::InstanceLoader;
use flowshop_solver::prelude::TabuSearch;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let instance = InstanceLoader::new().from_path(path)?;
    tracing::info!(
        "Solving instance with {} jobs ({} restarts, {} neighbours per iteration)",
        instance.job_count(),
        instance.algorithm_retries() + 1,
        instance.neighbour_search_count()
    );

    let rng = ChaCha8Rng::seed_from_u64(rand::rng().random());
    let outcome = TabuSearch::new(&instance, rng).run()?;

    println!("{}", outcome.schedule());
    println!("{}", outcome.makespan().value());
    Ok(())
}

fn main() -> ExitCode {
    enable_tracing();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: flowshop <instance.json>");
        return ExitCode::from(2);
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
