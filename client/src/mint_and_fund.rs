//! Creates a new SPL token mint and deposits its entire initial supply into the payer's associated
//! token account, all in one atomic transaction.
//!
//! The transaction contains, in order:
//! 1. `CreateAccount` for the new mint, funded with the rent-exempt minimum.
//! 2. `InitializeMint2` with the payer as both mint and freeze authority.
//! 3. `CreateAssociatedTokenAccount` for the payer.
//! 4. `MintToChecked` of the whole initial supply into that account.

use anyhow::anyhow;
use solana_address::Address;
use solana_instruction::Instruction;
use solana_sdk::{
    program_pack::Pack,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
};
use spl_token_interface::state::Mint;

use crate::{
    context::token::TokenContext,
    logs::{
        log_info,
        log_warning,
    },
    transactions::CustomRpcClient,
};

/// Decimal places of the new mint.
pub const MINT_DECIMALS: u8 = 6;
/// Initial supply in whole tokens.
pub const INITIAL_SUPPLY: u64 = 21_000_000;

/// Scales a whole-token amount to base units for a mint with `decimals` decimals.
pub fn to_base_units(whole_tokens: u64, decimals: u8) -> anyhow::Result<u64> {
    10u64
        .checked_pow(decimals as u32)
        .and_then(|scale| whole_tokens.checked_mul(scale))
        .ok_or_else(|| anyhow!("{whole_tokens} tokens with {decimals} decimals overflows a u64"))
}

/// The addresses and amounts of a single mint-and-fund transaction.
#[derive(Debug, Clone)]
pub struct MintAndFundPlan {
    pub token: TokenContext,
    pub owner: Address,
    /// Amount to mint, in base units.
    pub amount: u64,
}

impl MintAndFundPlan {
    /// A plan for a mint at `mint` with the default decimals and supply, where `payer` is the fee
    /// payer, both authorities, and the recipient of the supply.
    pub fn new(payer: Address, mint: Address) -> anyhow::Result<Self> {
        Ok(Self {
            token: TokenContext::with_single_authority(payer, mint, MINT_DECIMALS),
            owner: payer,
            amount: to_base_units(INITIAL_SUPPLY, MINT_DECIMALS)?,
        })
    }

    pub fn mint(&self) -> Address {
        self.token.mint_address
    }

    pub fn associated_token_account(&self) -> Address {
        self.token.get_ata_for(&self.owner)
    }

    /// Builds the four instructions in transaction order. `rent_lamports` funds the mint account.
    pub fn instructions(&self, rent_lamports: u64) -> anyhow::Result<Vec<Instruction>> {
        Ok(vec![
            self.token.create_mint_account(&self.owner, rent_lamports),
            self.token.initialize_mint()?,
            self.token.create_ata(&self.owner, &self.owner),
            self.token.mint_to_owner(&self.owner, self.amount)?,
        ])
    }

    /// Compares the on-chain mint and token balance with the plan and describes every mismatch.
    /// An empty result means the transaction produced exactly what was planned.
    pub fn discrepancies(&self, on_chain_mint: &TokenContext, balance: u64) -> Vec<String> {
        let expected = &self.token;
        let mut found = vec![];

        if on_chain_mint.mint_decimals != expected.mint_decimals {
            found.push(format!(
                "decimals: expected {}, found {}",
                expected.mint_decimals, on_chain_mint.mint_decimals
            ));
        }
        if on_chain_mint.mint_authority != expected.mint_authority {
            found.push(format!(
                "mint authority: expected {:?}, found {:?}",
                expected.mint_authority, on_chain_mint.mint_authority
            ));
        }
        if on_chain_mint.freeze_authority != expected.freeze_authority {
            found.push(format!(
                "freeze authority: expected {:?}, found {:?}",
                expected.freeze_authority, on_chain_mint.freeze_authority
            ));
        }
        if balance != self.amount {
            found.push(format!(
                "balance: expected {}, found {balance}",
                self.amount
            ));
        }

        found
    }
}

#[derive(Debug, Clone)]
pub struct MintAndFundOutput {
    pub plan: MintAndFundPlan,
    pub signature: Signature,
}

/// Runs the whole pipeline against `rpc`: generates a fresh mint keypair, queries rent, builds,
/// signs with the payer and the mint, submits, and waits for confirmation.
pub async fn mint_and_fund(
    rpc: &CustomRpcClient,
    payer: &Keypair,
) -> anyhow::Result<MintAndFundOutput> {
    let mint = Keypair::new();
    let plan = MintAndFundPlan::new(payer.pubkey(), mint.pubkey())?;
    log_info("Mint", plan.mint());

    let rent_lamports = rpc.minimum_balance_for_rent_exemption(Mint::LEN).await?;
    let instructions = plan.instructions(rent_lamports)?;

    let signature = rpc
        .send_and_confirm_txn(payer, &[&mint], &instructions)
        .await?;

    Ok(MintAndFundOutput { plan, signature })
}

/// Re-reads the mint and the payer's token account and logs any difference from the plan.
///
/// Returns the discrepancies found; fetching errors are returned as errors.
pub async fn verify(rpc: &CustomRpcClient, plan: &MintAndFundPlan) -> anyhow::Result<Vec<String>> {
    let on_chain_mint = rpc.get_mint(&plan.mint()).await?;
    let balance = rpc
        .get_token_balance(&plan.associated_token_account())
        .await?;

    let discrepancies = plan.discrepancies(&on_chain_mint, balance);
    for discrepancy in &discrepancies {
        log_warning("Verification", discrepancy);
    }

    Ok(discrepancies)
}
