use crate::types::RecordKind;
use crate::ContractError;
use soroban_sdk::{String, Vec};

/// Digits after the kind prefix in a record key, e.g. `H001`.
pub const KEY_DIGITS: usize = 3;
pub const KEY_LEN: usize = KEY_DIGITS + 1;

/// Amounts are stored in minor units with this many decimal places.
pub const AMOUNT_DECIMALS: u32 = 2;

pub const MAX_TEXT_LEN: u32 = 64;

// Upper bound on accepted amount text; longer input is rejected outright.
const MAX_AMOUNT_TEXT: usize = 40;

/// Parses a record key and returns its kind.
///
/// A key is one prefix letter followed by exactly three ASCII digits, not
/// all zero.
pub fn record_kind(key: &String) -> Result<RecordKind, ContractError> {
    if key.len() as usize != KEY_LEN {
        return Err(ContractError::InvalidKey);
    }
    let mut buf = [0u8; KEY_LEN];
    key.copy_into_slice(&mut buf);

    let kind = RecordKind::from_prefix(buf[0]).ok_or(ContractError::InvalidKey)?;
    let digits = &buf[1..];
    if !digits.iter().all(|b| b.is_ascii_digit()) || digits.iter().all(|b| *b == b'0') {
        return Err(ContractError::InvalidKey);
    }
    Ok(kind)
}

/// Checks that `key` is a well-formed key of the expected kind.
pub fn require_key(key: &String, expected: RecordKind) -> Result<(), ContractError> {
    if record_kind(key)? != expected {
        return Err(ContractError::InvalidKey);
    }
    Ok(())
}

pub fn validate_text(value: &String) -> Result<(), ContractError> {
    if value.len() == 0 || value.len() > MAX_TEXT_LEN {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

pub fn validate_amount(amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

/// Parses decimal text such as `"1000000.0"` into minor units.
///
/// Accepts digits with an optional `.` and at most [`AMOUNT_DECIMALS`]
/// fraction digits. Signs, exponents and whitespace are rejected.
pub fn parse_amount(text: &String) -> Result<i128, ContractError> {
    let len = text.len() as usize;
    if len == 0 || len > MAX_AMOUNT_TEXT {
        return Err(ContractError::InvalidAmount);
    }
    let mut buf = [0u8; MAX_AMOUNT_TEXT];
    text.copy_into_slice(&mut buf[..len]);
    parse_amount_bytes(&buf[..len])
}

fn parse_amount_bytes(bytes: &[u8]) -> Result<i128, ContractError> {
    let mut whole: i128 = 0;
    let mut fraction: i128 = 0;
    let mut fraction_digits: u32 = 0;
    let mut seen_point = false;
    let mut seen_digit = false;

    for &b in bytes {
        match b {
            b'.' if !seen_point => seen_point = true,
            b'0'..=b'9' => {
                let digit = i128::from(b - b'0');
                seen_digit = true;
                if seen_point {
                    if fraction_digits == AMOUNT_DECIMALS {
                        return Err(ContractError::InvalidAmount);
                    }
                    fraction = fraction * 10 + digit;
                    fraction_digits += 1;
                } else {
                    whole = whole
                        .checked_mul(10)
                        .and_then(|w| w.checked_add(digit))
                        .ok_or(ContractError::InvalidAmount)?;
                }
            }
            _ => return Err(ContractError::InvalidAmount),
        }
    }

    if !seen_digit {
        return Err(ContractError::InvalidAmount);
    }

    let scale = 10i128.pow(AMOUNT_DECIMALS);
    let fraction = fraction * 10i128.pow(AMOUNT_DECIMALS - fraction_digits);
    whole
        .checked_mul(scale)
        .and_then(|w| w.checked_add(fraction))
        .ok_or(ContractError::InvalidAmount)
}

pub fn require_arity(args: &Vec<String>, expected: u32) -> Result<(), ContractError> {
    if args.len() != expected {
        return Err(ContractError::IncorrectArgumentCount);
    }
    Ok(())
}
