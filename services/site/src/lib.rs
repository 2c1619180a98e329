mod cli;
mod demo;
mod export;
mod infra;
mod routes;
mod server;
mod widgets;

use skillkwiz::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
