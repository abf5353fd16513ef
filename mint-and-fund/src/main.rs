//! Creates a new SPL token mint with a 21,000,000 token supply held by the fee payer, in one
//! transaction.
//!
//! Reads `SECRET` and `RPC_ENDPOINT` (and optionally `COMMITMENT`) from the environment or a
//! `.env` file. On success, standard output has exactly two lines: the mint address and the
//! transaction signature. Failures are logged to standard error.

use mint_client::{
    load_env::Settings,
    logs::{
        log_error,
        log_success,
        log_warning,
    },
    mint_and_fund::{
        mint_and_fund,
        verify,
    },
    print_kv,
    transactions::CustomRpcClient,
    LogColor,
};
use solana_sdk::signer::Signer;

#[tokio::main]
async fn main() {
    // Every failure ends here; the exit status stays zero.
    if let Err(error) = run().await {
        log_error("Mint and fund failed", format!("{error:#}"));
    }
}

async fn run() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    print_kv!("RPC endpoint", settings.rpc_endpoint, LogColor::Info);
    print_kv!("Payer", settings.payer.pubkey(), LogColor::Info);

    let rpc = CustomRpcClient::new(settings.rpc_endpoint, settings.commitment);
    let output = mint_and_fund(&rpc, &settings.payer).await?;

    println!("{}", output.plan.mint());
    println!("{}", output.signature);

    match verify(&rpc, &output.plan).await {
        Ok(discrepancies) if discrepancies.is_empty() => log_success(
            "Verified",
            format!(
                "{} base units in {}",
                output.plan.amount,
                output.plan.associated_token_account()
            ),
        ),
        Ok(_) => {}
        Err(e) => log_warning("Verification skipped", format!("{e:#}")),
    }

    Ok(())
}
