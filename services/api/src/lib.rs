mod cli;
mod infra;
mod report;
mod routes;
mod server;

use household_fpl::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
