//! quiz-dapp entry point.
//!
//! Loads the env file, unlocks the keystore, connects to the gateway,
//! deploys or loads the quiz contract and hands stdin/stdout to the menu.

use alloy::primitives::utils::format_ether;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use quiz_dapp::blockchain::{QuizClient, QuizNetwork, Wallet};
use quiz_dapp::config::store::DEFAULT_ENV_PATH;
use quiz_dapp::config::validation::validate_connection;
use quiz_dapp::observability::init_logging;
use quiz_dapp::provisioner::{provision, Provisioned};
use quiz_dapp::{cli, EnvStore, QuizConfig, QuizError, Session};

#[derive(Parser)]
#[command(name = "quiz-dapp", version)]
#[command(about = "Interactive client for an on-chain quiz contract", long_about = None)]
struct Cli {
    /// Env file with gateway, keystore and quiz settings
    #[arg(long, default_value = DEFAULT_ENV_PATH)]
    env_file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    init_logging();

    tracing::info!("quiz-dapp v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args).await {
        tracing::error!(error = %e, fatal = e.is_fatal(), "Exiting");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn run(args: Cli) -> Result<(), QuizError> {
    let mut store = EnvStore::load(&args.env_file);
    let mut config = QuizConfig::from_store(&store)?;
    validate_connection(&config).map_err(QuizError::InvalidConfig)?;

    tracing::info!(
        gateway = %config.gateway,
        keystore = %config.keystore_path.display(),
        contract = %config.contract_address,
        "Configuration loaded"
    );

    let wallet = Wallet::from_keystore(&config.keystore_path, &config.keystore_password)
        .map_err(QuizError::Credential)?;
    wallet.verify_expected_address(&config.public_key);

    let client = QuizClient::connect(&config, &wallet)
        .await
        .map_err(QuizError::Connection)?;

    let mut session = Session::new(wallet);
    let account = session.wallet().address();
    match client.balance(account).await {
        Ok(balance) => tracing::info!(
            address = %account,
            balance_eth = %format_ether(balance),
            "Account balance"
        ),
        Err(e) => tracing::warn!(error = %e, "Could not read account balance"),
    }

    let mut stdout = io::stdout();
    let provisioned = provision(&client, &mut session, &mut config, &mut store, &mut stdout).await?;
    let path = match provisioned {
        Provisioned::Deployed { .. } => "deployed",
        Provisioned::Loaded { .. } => "loaded",
    };
    tracing::info!(contract = %provisioned.address(), path, "Quiz ready");

    let stdin = io::stdin();
    cli::run(&session, stdin.lock(), stdout).await?;

    Ok(())
}
