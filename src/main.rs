// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::process::ExitCode;

use movie_reviews::{Config, telemetry};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            telemetry::init(movie_reviews::config::DEFAULT_LOG_FILTER);
            tracing::error!(%error, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    telemetry::init(&config.log_filter);

    match movie_reviews::serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "server failed");
            ExitCode::FAILURE
        }
    }
}
