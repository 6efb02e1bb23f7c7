use std::io::BufRead;

use barberbook_booking::{auth::hash_password, config::StoreConfig, open_store};
use barberbook_shell::{handlers::Handler, run_shell};
use chrono::Local;
use color_eyre::eyre::{Result, eyre};
use dotenv::dotenv;
use tokio::io::{BufReader, stdin, stdout};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // `barberbook hash-password` reads a password from stdin and prints the
    // value to put in BARBER_PASSWORD_HASH.
    if std::env::args().nth(1).as_deref() == Some("hash-password") {
        let mut password = String::new();
        std::io::stdin().lock().read_line(&mut password)?;
        let password = password.trim_end_matches(['\r', '\n']);
        if password.is_empty() {
            return Err(eyre!("No password given on stdin"));
        }
        println!("{}", hash_password(password)?);
        return Ok(());
    }

    // Load configuration
    let config = StoreConfig::from_env()?;

    // Initialize logging; stdout belongs to the shell
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting barberbook");

    let store = open_store(&config).await?;
    let mut handler = Handler::new(store);

    run_shell(&mut handler, BufReader::new(stdin()), stdout(), || {
        Local::now().date_naive()
    })
    .await?;

    info!("Barberbook shut down gracefully");
    Ok(())
}
