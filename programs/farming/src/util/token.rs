use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::state::FarmingConfig;

/// Deposits reward tokens into a program vault and reports the amount the
/// vault actually received. Fee-on-transfer mints deliver less than was sent;
/// the measured delta is what enters the books.
pub fn transfer_to_vault_measured<'info>(
    payer: &Signer<'info>,
    from: &Account<'info, TokenAccount>,
    vault: &mut Account<'info, TokenAccount>,
    token_program: &Program<'info, Token>,
    amount: u64,
) -> Result<u64> {
    if amount == 0 {
        return Ok(0);
    }

    let balance_before = vault.amount;
    token::transfer(
        CpiContext::new(
            token_program.to_account_info(),
            Transfer {
                from: from.to_account_info(),
                to: vault.to_account_info(),
                authority: payer.to_account_info(),
            },
        ),
        amount,
    )?;
    vault.reload()?;

    Ok(vault.amount.saturating_sub(balance_before))
}

/// Pays tokens out of a program vault, signed by the config PDA that owns it.
pub fn transfer_from_vault<'info>(
    config: &Account<'info, FarmingConfig>,
    vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    token_program: &Program<'info, Token>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: vault.to_account_info(),
                to: to.to_account_info(),
                authority: config.to_account_info(),
            },
            &[&config.seeds()],
        ),
        amount,
    )
}
