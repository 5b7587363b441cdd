//! The transaction ledger and its on-disk slot.
//!
//! All application state lives in a single JSON file holding an array of
//! transactions. Reads fail soft: a missing or malformed file yields an
//! empty ledger, never an error. Every mutation rewrites the whole array;
//! the last write wins and there are no partial-write semantics.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use time::{Date, OffsetDateTime};

use crate::{
    Error,
    transaction::{Transaction, TransactionId, TransactionKind},
};

/// An ordered collection of transactions backed by a JSON file.
///
/// The store owns all mutation: the rest of the application receives
/// read-only snapshots via [TransactionStore::transactions] and requests
/// changes through [add](TransactionStore::add),
/// [update](TransactionStore::update) and [remove](TransactionStore::remove),
/// each of which flushes the ledger back to disk. A mutation that fails
/// validation leaves both the ledger and the file untouched.
#[derive(Debug)]
pub struct TransactionStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Open the ledger at `path`, creating an empty ledger if the file is
    /// missing or cannot be parsed.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let transactions = read_slot(&path);

        Self { path, transactions }
    }

    /// A read-only snapshot of the ledger, in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Find a transaction by its ID.
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Append a new transaction with a freshly minted ID.
    ///
    /// # Errors
    /// Returns [Error::EmptyDescription] or [Error::InvalidAmount] when the
    /// input fails validation, or [Error::StoreSave] when the ledger file
    /// cannot be written. The ledger is unchanged in the first two cases.
    pub fn add(
        &mut self,
        description: &str,
        amount: f64,
        kind: TransactionKind,
        date: Date,
    ) -> Result<Transaction, Error> {
        validate(description, amount)?;

        let transaction = Transaction {
            id: self.mint_id(),
            description: description.to_owned(),
            amount,
            kind,
            date,
        };

        self.transactions.push(transaction.clone());
        self.save()?;

        Ok(transaction)
    }

    /// Replace the transaction whose ID matches `transaction.id`.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTransaction] when no transaction has a
    /// matching ID, or the same validation errors as
    /// [add](TransactionStore::add). The ledger is unchanged on error.
    pub fn update(&mut self, transaction: Transaction) -> Result<(), Error> {
        validate(&transaction.description, transaction.amount)?;

        let entry = self
            .transactions
            .iter_mut()
            .find(|t| t.id == transaction.id)
            .ok_or(Error::UpdateMissingTransaction)?;

        *entry = transaction;
        self.save()
    }

    /// Remove and return the transaction with the given ID.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] when no transaction has a
    /// matching ID.
    pub fn remove(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        let index = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::DeleteMissingTransaction(id))?;

        let removed = self.transactions.remove(index);
        self.save()?;

        Ok(removed)
    }

    /// Mint a fresh transaction ID.
    ///
    /// IDs are the Unix time in milliseconds, nudged past the current
    /// maximum when two transactions are created within the same
    /// millisecond, so they are unique and monotonically increasing.
    fn mint_id(&self) -> TransactionId {
        let now_ms = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000)
            as TransactionId;
        let last = self.transactions.iter().map(|t| t.id).max().unwrap_or(0);

        now_ms.max(last + 1)
    }

    /// Flush the whole ledger to the slot, overwriting the prior contents.
    fn save(&self) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(&self.transactions)
            .map_err(|error| Error::StoreSave(error.to_string()))?;

        fs::write(&self.path, json)
            .inspect_err(|error| {
                tracing::error!("Could not write ledger file {}: {error}", self.path.display())
            })
            .map_err(|error| Error::StoreSave(error.to_string()))
    }
}

/// Read the persisted slot, treating missing or malformed data as an empty
/// history.
fn read_slot(path: &Path) -> Vec<Transaction> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Vec::new(),
        Err(error) => {
            tracing::warn!(
                "Could not read ledger file {}: {error}. Starting with an empty ledger.",
                path.display()
            );
            return Vec::new();
        }
    };

    match serde_json::from_str(&text) {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::warn!(
                "Could not parse ledger file {}: {error}. Starting with an empty ledger.",
                path.display()
            );
            Vec::new()
        }
    }
}

fn validate(description: &str, amount: f64) -> Result<(), Error> {
    if description.trim().is_empty() {
        return Err(Error::EmptyDescription);
    }

    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidAmount(amount));
    }

    Ok(())
}
