//! # Domain Services
//!
//! Pure functions used by the aggregator and the adapters.
//! Deterministic, no I/O.

use crate::domain::value_objects::{Address, U256};
use crate::errors::ArithmeticError;
use sha3::{Digest, Keccak256};

// =============================================================================
// CONTRACT ADDRESS COMPUTATION
// =============================================================================

/// Computes the address a CREATE deployment by `deployer` at `nonce` lands on.
///
/// Address = keccak256(rlp(\[deployer, nonce\]))\[12:\]
///
/// Per Ethereum Yellow Paper, section 7.
#[must_use]
pub fn compute_contract_address(deployer: Address, nonce: u64) -> Address {
    let mut content = Vec::with_capacity(30);

    // RLP encode address (20 bytes, 0x80 + 20 = 0x94)
    content.push(0x94);
    content.extend_from_slice(deployer.as_bytes());

    // RLP encode nonce
    let nonce_bytes = nonce.to_be_bytes();
    if nonce == 0 {
        content.push(0x80); // Empty byte string
    } else if nonce < 128 {
        content.push(nonce_bytes[7]);
    } else {
        let start = nonce_bytes.iter().position(|&b| b != 0).unwrap_or(7);
        content.push(0x80 + (8 - start) as u8);
        content.extend_from_slice(&nonce_bytes[start..]);
    }

    // At most 30 bytes of content, so the short list header always applies.
    let mut rlp_data = Vec::with_capacity(31);
    rlp_data.push(0xc0 + content.len() as u8);
    rlp_data.extend_from_slice(&content);

    let hash = Keccak256::digest(&rlp_data);
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&hash[12..32]);
    Address::new(addr)
}

// =============================================================================
// BALANCE ARITHMETIC
// =============================================================================

/// `floor(reserve * shares / total_shares)`.
///
/// # Errors
///
/// `DivisionByZero` when `total_shares` is zero, `Overflow` when the
/// product does not fit in 256 bits.
pub fn pro_rata_share(
    reserve: U256,
    shares: U256,
    total_shares: U256,
) -> Result<U256, ArithmeticError> {
    if total_shares.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    let product = reserve
        .checked_mul(shares)
        .ok_or(ArithmeticError::Overflow)?;
    Ok(product / total_shares)
}

/// Adds `amount` to `total`, failing closed on overflow.
pub fn checked_accumulate(total: U256, amount: U256) -> Result<U256, ArithmeticError> {
    total.checked_add(amount).ok_or(ArithmeticError::Overflow)
}

// =============================================================================
// TESTS
// =============================================================================
