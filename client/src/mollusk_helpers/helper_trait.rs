use std::collections::HashMap;

use mollusk_svm::MolluskContext;
use solana_account::Account;
use solana_address::Address;
use solana_sdk::program_pack::Pack;
use spl_associated_token_account_interface::address::get_associated_token_address;
use spl_token_interface::state::Account as TokenAccount;

use crate::context::token::TokenContext;

pub trait TokenTestHelper {
    fn get_account(&self, address: &Address) -> Option<Account>;

    fn get_token_balance(&self, user: &Address, token_mint: &Address) -> u64;

    fn view_mint(&self, mint_address: &Address) -> TokenContext;
}

impl TokenTestHelper for MolluskContext<HashMap<Address, Account>> {
    fn get_account(&self, address: &Address) -> Option<Account> {
        self.account_store.borrow().get(address).cloned()
    }

    fn get_token_balance(&self, user: &Address, token_mint: &Address) -> u64 {
        let account_store = self.account_store.borrow();

        let user_ata = get_associated_token_address(user, token_mint);

        let acc = account_store.get(&user_ata).unwrap_or_else(|| {
            panic!("User token account doesn't exist, user: {user}, token account: {user_ata}")
        });

        TokenAccount::unpack(&acc.data)
            .map(|account| account.amount)
            .expect("Should unpack token account")
    }

    fn view_mint(&self, mint_address: &Address) -> TokenContext {
        let account_store = self.account_store.borrow();

        let acc = account_store
            .get(mint_address)
            .expect("Mint address should exist in mollusk account store");
        TokenContext::from_account_data(*mint_address, acc.owner, &acc.data)
            .expect("Account data isn't valid for a mint account")
    }
}
