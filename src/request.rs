//! Request builders, one per RPC method.
//!
//! Builders only assemble and check the envelope. Nothing here touches the network.

use crate::constant::{
    METHOD_ACCOUNT_CHANNELS, METHOD_CHANNEL_AUTHORIZE, METHOD_PING, METHOD_SIGN, METHOD_SUBMIT,
};
use crate::error::{Result, RippledError};
use crate::types::{ChannelOptions, Param, Request, Transaction};

pub fn ping() -> Request {
    Request::new(METHOD_PING)
}

/// `sign` for an XRP payment. The server fills in sequence and fee.
pub fn sign(secret: &str, account: &str, destination: &str, amount_drops: u64) -> Result<Request> {
    non_empty(secret, "secret")?;
    non_empty(account, "account")?;
    non_empty(destination, "destination")?;
    non_zero(amount_drops)?;

    let tx = Transaction::payment(account, destination, amount_drops);
    tx.validate()?;

    Ok(Request::new(METHOD_SIGN).with_param(Param {
        offline: Some(false),
        secret: Some(secret.to_string()),
        tx_json: Some(tx),
        ..Default::default()
    }))
}

/// `submit` of an already signed blob.
pub fn submit_blob(tx_blob: &str) -> Result<Request> {
    non_empty(tx_blob, "tx_blob")?;
    if hex::decode(tx_blob).is_err() {
        return Err(RippledError::Validation("tx_blob is not hex".to_string()));
    }

    Ok(Request::new(METHOD_SUBMIT).with_param(Param {
        tx_blob: Some(tx_blob.to_string()),
        ..Default::default()
    }))
}

/// Sign-and-submit of a `PaymentChannelCreate` with the default settle delay and fee ceiling.
pub fn open_payment_channel(
    secret: &str,
    account: &str,
    amount_drops: u64,
    destination: &str,
    public_key_hex: &str,
) -> Result<Request> {
    open_payment_channel_with(
        secret,
        account,
        amount_drops,
        destination,
        public_key_hex,
        ChannelOptions::default(),
    )
}

pub fn open_payment_channel_with(
    secret: &str,
    account: &str,
    amount_drops: u64,
    destination: &str,
    public_key_hex: &str,
    options: ChannelOptions,
) -> Result<Request> {
    non_empty(secret, "secret")?;
    non_empty(account, "account")?;
    non_empty(destination, "destination")?;
    non_zero(amount_drops)?;
    non_empty(public_key_hex, "public key")?;
    if hex::decode(public_key_hex).is_err() {
        return Err(RippledError::Validation(format!(
            "public key is not hex: {public_key_hex}"
        )));
    }

    let tx = Transaction::payment_channel_create(
        account,
        destination,
        amount_drops,
        options.settle_delay,
        public_key_hex,
    );
    tx.validate()?;

    Ok(Request::new(METHOD_SUBMIT).with_param(Param {
        secret: Some(secret.to_string()),
        tx_json: Some(tx),
        fee_mult_max: Some(options.fee_mult_max),
        ..Default::default()
    }))
}

/// `account_channels` for channels from `account` to `destination`.
pub fn get_channels(account: &str, destination: &str) -> Result<Request> {
    non_empty(account, "account")?;
    non_empty(destination, "destination")?;

    Ok(Request::new(METHOD_ACCOUNT_CHANNELS).with_param(Param {
        account: Some(account.to_string()),
        destination_account: Some(destination.to_string()),
        ..Default::default()
    }))
}

/// `channel_authorize`: sign a claim against a channel for `amount_drops`.
pub fn channel_authorize(channel_id: &str, secret: &str, amount_drops: u64) -> Result<Request> {
    non_empty(channel_id, "channel id")?;
    non_empty(secret, "secret")?;
    non_zero(amount_drops)?;

    Ok(Request::new(METHOD_CHANNEL_AUTHORIZE).with_param(Param {
        channel_id: Some(channel_id.to_string()),
        secret: Some(secret.to_string()),
        amount: Some(amount_drops),
        ..Default::default()
    }))
}

fn non_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RippledError::Validation(format!("{name} must not be empty")));
    }
    Ok(())
}

fn non_zero(amount_drops: u64) -> Result<()> {
    if amount_drops == 0 {
        return Err(RippledError::Validation("amount must be at least one drop".to_string()));
    }
    Ok(())
}
