//! Program IDs of the on-chain programs the mint-and-fund transaction invokes.

use solana_sdk::pubkey::Pubkey;

/// The System program ID.
pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::from_str_const("11111111111111111111111111111111");
/// The SPL Token program ID.
pub const SPL_TOKEN_ID: Pubkey =
    Pubkey::from_str_const("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
/// The SPL Associated Token Account program ID.
pub const SPL_ASSOCIATED_TOKEN_ACCOUNT_ID: Pubkey =
    Pubkey::from_str_const("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

/// Returns a short human-readable name for a known program ID.
pub fn program_name(program_id: &Pubkey) -> Option<&'static str> {
    [
        (SYSTEM_PROGRAM_ID, "System"),
        (SPL_TOKEN_ID, "SPL Token"),
        (SPL_ASSOCIATED_TOKEN_ACCOUNT_ID, "Associated Token Account"),
    ]
    .into_iter()
    .find_map(|(id, name)| (id == *program_id).then_some(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_interface_crates() {
        assert_eq!(SPL_TOKEN_ID, spl_token_interface::ID);
        assert_eq!(
            SPL_ASSOCIATED_TOKEN_ACCOUNT_ID,
            spl_associated_token_account_interface::program::ID
        );
        assert_eq!(SYSTEM_PROGRAM_ID, solana_system_interface::program::ID);
    }

    #[test]
    fn unknown_program_has_no_name() {
        assert_eq!(program_name(&Pubkey::new_unique()), None);
        assert_eq!(program_name(&SPL_TOKEN_ID), Some("SPL Token"));
    }
}
