use mint_client::{
    mint_and_fund::{
        MintAndFundPlan,
        INITIAL_SUPPLY,
        MINT_DECIMALS,
    },
    mollusk_helpers::{
        helper_trait::TokenTestHelper,
        new_token_mollusk_context,
        utils::create_mock_user_account,
    },
    program_ids::SPL_TOKEN_ID,
};
use solana_address::Address;
use solana_sdk::{
    program_pack::Pack,
    rent::Rent,
    signature::Keypair,
    signer::Signer,
};
use spl_token_interface::state::{
    Account as TokenAccount,
    Mint,
};

const FUNDED_LAMPORTS: u64 = 100_000_000_000;

#[test]
fn mint_and_fund_in_one_transaction() -> anyhow::Result<()> {
    let payer_mock = create_mock_user_account(Address::new_unique(), FUNDED_LAMPORTS);
    let payer = payer_mock.0;
    let mollusk = new_token_mollusk_context(vec![payer_mock]);

    let mint_keypair = Keypair::new();
    let plan = MintAndFundPlan::new(payer, mint_keypair.pubkey())?;
    let rent_lamports = Rent::default().minimum_balance(Mint::LEN);

    assert!(mollusk
        .process_instruction_chain(&plan.instructions(rent_lamports)?)
        .program_result
        .is_ok());

    // The mint account is rent exempt, owned by the token program, and sized for a mint.
    let mint_account = mollusk
        .get_account(&plan.mint())
        .expect("Mint account should exist");
    assert_eq!(mint_account.owner, SPL_TOKEN_ID);
    assert_eq!(mint_account.lamports, rent_lamports);
    assert_eq!(mint_account.data.len(), Mint::LEN);

    // The payer holds both authorities over a 6 decimal mint.
    let mint = mollusk.view_mint(&plan.mint());
    assert_eq!(mint.mint_decimals, MINT_DECIMALS);
    assert_eq!(mint.mint_decimals, 6);
    assert_eq!(mint.mint_authority, Some(payer));
    assert_eq!(mint.freeze_authority, Some(payer));

    // The whole supply lands in the payer's associated token account.
    let expected_amount = 21_000_000 * 10u64.pow(6);
    let balance = mollusk.get_token_balance(&payer, &plan.mint());
    assert_eq!(balance, expected_amount);
    assert_eq!(balance, INITIAL_SUPPLY * 1_000_000);

    let raw_mint = Mint::unpack(&mint_account.data)?;
    assert!(raw_mint.is_initialized);
    assert_eq!(raw_mint.supply, expected_amount);

    let ata = mollusk
        .get_account(&plan.associated_token_account())
        .expect("Associated token account should exist");
    let token_account = TokenAccount::unpack(&ata.data)?;
    assert_eq!(token_account.owner, payer);
    assert_eq!(token_account.mint, plan.mint());

    assert!(plan.discrepancies(&mint, balance).is_empty());

    Ok(())
}

#[test]
fn each_run_creates_a_distinct_mint() -> anyhow::Result<()> {
    let payer_mock = create_mock_user_account(Address::new_unique(), FUNDED_LAMPORTS);
    let payer = payer_mock.0;
    let mollusk = new_token_mollusk_context(vec![payer_mock]);
    let rent_lamports = Rent::default().minimum_balance(Mint::LEN);

    let first = MintAndFundPlan::new(payer, Keypair::new().pubkey())?;
    let second = MintAndFundPlan::new(payer, Keypair::new().pubkey())?;
    assert_ne!(first.mint(), second.mint());
    assert_ne!(
        first.associated_token_account(),
        second.associated_token_account()
    );

    for plan in [&first, &second] {
        assert!(mollusk
            .process_instruction_chain(&plan.instructions(rent_lamports)?)
            .program_result
            .is_ok());
    }

    let expected_amount = first.amount;
    assert_eq!(mollusk.get_token_balance(&payer, &first.mint()), expected_amount);
    assert_eq!(mollusk.get_token_balance(&payer, &second.mint()), expected_amount);

    Ok(())
}

#[test]
fn rerunning_with_the_same_mint_fails() -> anyhow::Result<()> {
    let payer_mock = create_mock_user_account(Address::new_unique(), FUNDED_LAMPORTS);
    let payer = payer_mock.0;
    let mollusk = new_token_mollusk_context(vec![payer_mock]);
    let rent_lamports = Rent::default().minimum_balance(Mint::LEN);

    let plan = MintAndFundPlan::new(payer, Keypair::new().pubkey())?;
    let instructions = plan.instructions(rent_lamports)?;

    assert!(mollusk
        .process_instruction_chain(&instructions)
        .program_result
        .is_ok());
    // The mint account already exists, so `CreateAccount` rejects the replay.
    assert!(mollusk
        .process_instruction_chain(&instructions)
        .program_result
        .is_err());

    assert_eq!(mollusk.get_token_balance(&payer, &plan.mint()), plan.amount);

    Ok(())
}

#[test]
fn insufficient_funds_fails() -> anyhow::Result<()> {
    let rent_lamports = Rent::default().minimum_balance(Mint::LEN);
    let payer_mock = create_mock_user_account(Address::new_unique(), rent_lamports / 2);
    let payer = payer_mock.0;
    let mollusk = new_token_mollusk_context(vec![payer_mock]);

    let plan = MintAndFundPlan::new(payer, Keypair::new().pubkey())?;

    assert!(mollusk
        .process_instruction_chain(&plan.instructions(rent_lamports)?)
        .program_result
        .is_err());

    Ok(())
}
