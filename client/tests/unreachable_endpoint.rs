use mint_client::{
    mint_and_fund::{
        mint_and_fund,
        verify,
        MintAndFundPlan,
    },
    transactions::CustomRpcClient,
};
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    signature::Keypair,
    signer::Signer,
};

// Nothing listens on port 1, so every request is refused.
const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1";

fn unreachable_rpc() -> CustomRpcClient {
    CustomRpcClient::new(UNREACHABLE_ENDPOINT, CommitmentConfig::confirmed())
}

#[tokio::test]
async fn mint_and_fund_returns_error_with_context() {
    let rpc = unreachable_rpc();
    let payer = Keypair::new();

    let err = mint_and_fund(&rpc, &payer)
        .await
        .err()
        .expect("An unreachable endpoint should fail");

    // The rent query is the first RPC call, so it's the one that fails.
    assert!(format!("{err:#}").contains("Couldn't fetch the rent-exempt minimum for 82 bytes"));
}

#[tokio::test]
async fn send_fails_before_signing_without_a_blockhash() -> anyhow::Result<()> {
    let rpc = unreachable_rpc();
    let payer = Keypair::new();
    let mint = Keypair::new();
    let plan = MintAndFundPlan::new(payer.pubkey(), mint.pubkey())?;

    let err = rpc
        .send_and_confirm_txn(&payer, &[&mint], &plan.instructions(1_461_600)?)
        .await
        .err()
        .expect("An unreachable endpoint should fail");
    assert!(format!("{err:#}").contains("Couldn't fetch a recent blockhash"));

    Ok(())
}

#[tokio::test]
async fn verify_reports_fetch_errors() -> anyhow::Result<()> {
    let rpc = unreachable_rpc();
    let plan = MintAndFundPlan::new(Keypair::new().pubkey(), Keypair::new().pubkey())?;

    let err = verify(&rpc, &plan)
        .await
        .err()
        .expect("An unreachable endpoint should fail");
    assert!(format!("{err:#}").contains(&format!("Couldn't fetch mint account {}", plan.mint())));

    Ok(())
}
