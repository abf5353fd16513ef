use anyhow::Context;
use colored::Colorize;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    hash::Hash,
    message::{
        Instruction,
        Message,
    },
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};

use crate::{
    context::token::TokenContext,
    logs::{
        log_error,
        log_info,
        log_success,
        LogColor,
    },
    pretty::instruction_error::PrettyInstructionError,
};

/// A nonblocking RPC client that logs the outcome of every transaction it submits.
pub struct CustomRpcClient {
    pub client: RpcClient,
}

impl CustomRpcClient {
    pub fn new(rpc_endpoint: impl Into<String>, commitment: CommitmentConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(rpc_endpoint.into(), commitment),
        }
    }

    pub async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> anyhow::Result<u64> {
        self.client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await
            .with_context(|| format!("Couldn't fetch the rent-exempt minimum for {data_len} bytes"))
    }

    /// Signs `instructions` with the payer and every extra signer, submits the transaction, and
    /// waits for confirmation at the client's commitment level.
    ///
    /// On a preflight failure the offending instruction is logged before the error is returned.
    pub async fn send_and_confirm_txn(
        &self,
        payer: &Keypair,
        signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        let bh = self
            .client
            .get_latest_blockhash()
            .await
            .context("Couldn't fetch a recent blockhash")?;

        let tx = sign_transaction(payer, signers, instructions, bh)?;

        match self.client.send_and_confirm_transaction(&tx).await {
            Ok(sig) => {
                let sender_info =
                    format!("{}: {}", "sender".color(LogColor::Gray), payer.pubkey());
                log_success("Signature", format!("{sig}\n{sender_info}"));
                Ok(sig)
            }
            Err(error) => {
                if let Some(pretty) = PrettyInstructionError::new(&error, instructions) {
                    log_error("Instruction failed", pretty);
                }
                log_info("Payer", payer.pubkey());

                Err(error).context("Failed transaction submission")
            }
        }
    }

    /// Fetches and unpacks a mint account.
    pub async fn get_mint(&self, mint: &Pubkey) -> anyhow::Result<TokenContext> {
        let account = self
            .client
            .get_account(mint)
            .await
            .with_context(|| format!("Couldn't fetch mint account {mint}"))?;
        TokenContext::from_account_data(*mint, account.owner, &account.data)
    }

    /// Returns the raw (base unit) balance of a token account.
    pub async fn get_token_balance(&self, token_account: &Pubkey) -> anyhow::Result<u64> {
        let balance = self
            .client
            .get_token_account_balance(token_account)
            .await
            .with_context(|| format!("Couldn't fetch token account {token_account}"))?;
        balance
            .amount
            .parse()
            .with_context(|| format!("Invalid token amount `{}`", balance.amount))
    }
}

/// Builds a transaction paid for by `payer` and signs it with the payer followed by every extra
/// signer.
pub fn sign_transaction(
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
    recent_blockhash: Hash,
) -> anyhow::Result<Transaction> {
    let msg = Message::new(instructions, Some(&payer.pubkey()));

    let mut tx = Transaction::new_unsigned(msg);
    tx.try_sign(
        &[std::iter::once(payer)
            .chain(signers.iter().cloned())
            .collect::<Vec<_>>()]
        .concat(),
        recent_blockhash,
    )
    .context("Couldn't sign the transaction")?;

    Ok(tx)
}
