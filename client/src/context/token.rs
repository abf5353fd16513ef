//! Token-level context containing mint metadata and helpers for deriving associated token accounts
//! and building the instructions that create, initialize, and mint a token.

use solana_address::Address;
use solana_instruction::Instruction;
use solana_sdk::program_pack::Pack;
use spl_associated_token_account_interface::{
    address::get_associated_token_address_with_program_id,
    instruction::create_associated_token_account,
};
use spl_token_interface::{
    instruction::{
        initialize_mint2,
        mint_to_checked,
    },
    state::Mint,
};

use crate::program_ids::SPL_TOKEN_ID;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenContext {
    pub mint_authority: Option<Address>,
    pub freeze_authority: Option<Address>,
    pub mint_address: Address,
    pub token_program: Address,
    pub mint_decimals: u8,
}

impl TokenContext {
    pub const fn new(
        mint_authority: Option<Address>,
        freeze_authority: Option<Address>,
        mint_address: Address,
        token_program: Address,
        mint_decimals: u8,
    ) -> Self {
        Self {
            mint_authority,
            freeze_authority,
            mint_address,
            token_program,
            mint_decimals,
        }
    }

    /// A context for a not-yet-created SPL Token mint where `authority` is both the mint and
    /// freeze authority.
    pub const fn with_single_authority(
        authority: Address,
        mint_address: Address,
        mint_decimals: u8,
    ) -> Self {
        Self::new(
            Some(authority),
            Some(authority),
            mint_address,
            SPL_TOKEN_ID,
            mint_decimals,
        )
    }

    /// Creates a [`TokenContext`] from an on-chain mint account's owner and data.
    ///
    /// Validates that the owner is the SPL Token program and unpacks the mint to extract the
    /// decimals and authorities.
    pub fn from_account_data(
        mint_address: Address,
        owner: Address,
        data: &[u8],
    ) -> anyhow::Result<Self> {
        if owner != SPL_TOKEN_ID {
            return Err(anyhow::anyhow!(
                "Mint {mint_address} is owned by {owner}, not the SPL Token program"
            ));
        }
        let mint = Mint::unpack(data)?;
        Ok(Self::new(
            mint.mint_authority.into(),
            mint.freeze_authority.into(),
            mint_address,
            owner,
            mint.decimals,
        ))
    }

    pub fn get_ata_for(&self, owner: &Address) -> Address {
        get_associated_token_address_with_program_id(owner, &self.mint_address, &self.token_program)
    }

    /// Builds a system `create_account` instruction that allocates a mint-sized account at the
    /// mint address, owned by the token program and funded by `funder` with `rent_lamports`.
    pub fn create_mint_account(&self, funder: &Address, rent_lamports: u64) -> Instruction {
        solana_system_interface::instruction::create_account(
            funder,
            &self.mint_address,
            rent_lamports,
            Mint::LEN as u64,
            &self.token_program,
        )
    }

    /// Builds an `initialize_mint2` instruction with this context's decimals and authorities.
    pub fn initialize_mint(&self) -> anyhow::Result<Instruction> {
        let Some(ref mint_authority) = self.mint_authority else {
            return Err(anyhow::anyhow!("Token doesn't have a mint authority."));
        };

        Ok(initialize_mint2(
            &self.token_program,
            &self.mint_address,
            mint_authority,
            self.freeze_authority.as_ref(),
            self.mint_decimals,
        )?)
    }

    /// Builds a create-ATA instruction for the given `owner`, funded by `funder`.
    pub fn create_ata(&self, funder: &Address, owner: &Address) -> Instruction {
        create_associated_token_account(funder, owner, &self.mint_address, &self.token_program)
    }

    /// Builds a `mint_to_checked` instruction that mints `amount` tokens to the `owner`'s
    /// associated token account.
    ///
    /// To mint directly to an associated token account, use [TokenContext::mint_to_ata]
    pub fn mint_to_owner(&self, owner: &Address, amount: u64) -> anyhow::Result<Instruction> {
        self.mint_to_ata(&self.get_ata_for(owner), amount)
    }

    /// Builds a `mint_to_checked` instruction that mints `amount` tokens to `destination_ata`.
    pub fn mint_to_ata(
        &self,
        destination_ata: &Address,
        amount: u64,
    ) -> anyhow::Result<Instruction> {
        if let Some(ref mint_authority) = self.mint_authority {
            Ok(mint_to_checked(
                &self.token_program,
                &self.mint_address,
                destination_ata,
                mint_authority,
                &[],
                amount,
                self.mint_decimals,
            )?)
        } else {
            Err(anyhow::anyhow!("Token doesn't have a mint authority."))
        }
    }
}
