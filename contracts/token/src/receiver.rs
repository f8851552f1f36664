//! # Receive-hook capability
//!
//! Contracts that want to be notified of incoming token transfers implement
//! [`TokenReceiver`] and are registered on the ledger by its owner. At
//! transfer time the destination is resolved once into a [`Recipient`]:
//! plain addresses are simply credited, hooked addresses get
//! `on_token_received` invoked synchronously inside the same transfer.
//!
//! The hook's return value tells the ledger what to do with the credited
//! tokens. `ReceiverAction::Burn` exists for the sell-back path: the
//! crowdsale engine cannot call back into the ledger while the ledger is
//! mid-transfer (Soroban rejects reentry), so the burn instruction rides on
//! the hook's return value and the ledger applies it itself. The ledger only
//! honors `Burn` from the configured token generator.

use soroban_sdk::{contractclient, contracttype, Address, Env};

use crate::storage;

/// Disposition of tokens credited to a hooked recipient.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReceiverAction {
    /// Keep the credited tokens.
    Keep,
    /// Burn the credited tokens and reduce total supply.
    ///
    /// Honored only when the recipient is the token generator.
    Burn,
}

/// Interface a contract implements to receive token transfers.
///
/// `ledger` is the address of the calling token contract; implementations
/// that care about the originator should `require_auth` it, which only the
/// ledger can satisfy as the direct invoker.
#[contractclient(name = "TokenReceiverClient")]
pub trait TokenReceiver {
    fn on_token_received(env: Env, ledger: Address, from: Address, amount: i128) -> ReceiverAction;
}

/// Transfer destination, resolved once per transfer.
pub enum Recipient {
    /// No receive hook; credit and finish.
    Plain(Address),
    /// Registered receiver; invoke the hook after crediting.
    Hooked(Address),
}

impl Recipient {
    pub fn resolve(env: &Env, to: Address) -> Self {
        if storage::is_receiver(env, &to) {
            Recipient::Hooked(to)
        } else {
            Recipient::Plain(to)
        }
    }
}
