//! CSV replay input and wallet-summary output for the CLI.
//!
//! The replay format is one operation per row: `op,vendor,ref,amount,arg`.
//! `ref` is the task id for task ops and the request id for withdrawal
//! resolutions; `arg` carries the op-specific string (flavor, reason,
//! payment reference, note).

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::engine::{CancelActor, CashCollection, VendorWallet, WithdrawalDecision};
use crate::model::{TaskFlavor, TaskId, VendorId, WithdrawalId};
use crate::{Amount, Command};

/// Errors that can occur when parsing replay rows
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized op '{op}'")]
    UnrecognizedOp { line: usize, op: String },

    #[error("line {line}: {op} missing {field}")]
    MissingField {
        line: usize,
        op: String,
        field: &'static str,
    },

    #[error("line {line}: {op} ref {value} does not fit a task id")]
    RefOutOfRange { line: usize, op: String, value: u64 },
}

#[derive(Debug, Deserialize)]
struct InputRow {
    op: String,
    vendor: Option<VendorId>,
    r#ref: Option<u64>,
    amount: Option<f64>,
    arg: Option<String>,
}

#[derive(Debug, Serialize)]
struct OutputRow {
    vendor: VendorId,
    balance: String,
    security_deposit: String,
    withdrawable: String,
    mandatory_deposit: bool,
}

impl InputRow {
    fn vendor(&self, line: usize) -> Result<VendorId, CsvError> {
        self.vendor.ok_or(CsvError::MissingField {
            line,
            op: self.op.clone(),
            field: "vendor",
        })
    }

    fn task(&self, line: usize) -> Result<TaskId, CsvError> {
        let r = self.r#ref.ok_or(CsvError::MissingField {
            line,
            op: self.op.clone(),
            field: "ref",
        })?;
        TaskId::try_from(r).map_err(|_| CsvError::RefOutOfRange {
            line,
            op: self.op.clone(),
            value: r,
        })
    }

    fn request(&self, line: usize) -> Result<WithdrawalId, CsvError> {
        self.r#ref.ok_or(CsvError::MissingField {
            line,
            op: self.op.clone(),
            field: "ref",
        })
    }

    fn amount(&self, line: usize) -> Result<Amount, CsvError> {
        self.amount
            .map(Amount::from_float)
            .ok_or(CsvError::MissingField {
                line,
                op: self.op.clone(),
                field: "amount",
            })
    }
}

/// Read replay commands from a csv file
pub fn read_commands(path: impl AsRef<Path>) -> impl Iterator<Item = Result<Command, CsvError>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .expect("failed to open csv file");

    reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            row_to_command(row, line)
        })
}

fn row_to_command(row: InputRow, line: usize) -> Result<Command, CsvError> {
    let command = match row.op.as_str() {
        "create" => {
            let flavor = match row.arg.as_deref() {
                Some("ticket") => TaskFlavor::SupportTicket,
                _ => TaskFlavor::Booking,
            };
            Command::CreateTask {
                task: row.task(line)?,
                flavor,
                customer: String::new(),
                billing_amount: row.amount(line)?,
            }
        }
        "assign" => Command::Assign {
            task: row.task(line)?,
            vendor: row.vendor(line)?,
        },
        "accept" => Command::Accept {
            task: row.task(line)?,
            vendor: row.vendor(line)?,
        },
        "decline" => Command::Decline {
            task: row.task(line)?,
            vendor: row.vendor(line)?,
            reason: row.arg.clone().unwrap_or_else(|| "declined".to_string()),
        },
        "start" => Command::Start {
            task: row.task(line)?,
            vendor: row.vendor(line)?,
        },
        "complete" => Command::Complete {
            task: row.task(line)?,
            vendor: row.vendor(line)?,
            payment_ref: row.arg.clone(),
        },
        // replay rows exist only for collections the vendor confirmed
        "cash" => Command::CollectCash {
            task: row.task(line)?,
            vendor: row.vendor(line)?,
            collection: CashCollection {
                confirmed: true,
                gst_bp: None,
                cash_photo: row.arg.clone(),
            },
        },
        "cancel" => Command::Cancel {
            task: row.task(line)?,
            by: match row.vendor {
                Some(v) => CancelActor::Vendor(v),
                None => CancelActor::Admin,
            },
            reason: row.arg.clone().unwrap_or_else(|| "cancelled".to_string()),
        },
        "deposit" => Command::RecordDeposit {
            vendor: row.vendor(line)?,
            amount: row.amount(line)?,
            reference: row.arg.clone(),
        },
        "adjust" => Command::ManualAdjustment {
            vendor: row.vendor(line)?,
            amount: row.amount(line)?,
            note: row.arg.clone().unwrap_or_default(),
        },
        "withdraw-request" => Command::RequestWithdrawal {
            vendor: row.vendor(line)?,
            amount: row.amount(line)?,
        },
        "withdraw-approve" => Command::ResolveWithdrawal {
            request: row.request(line)?,
            decision: WithdrawalDecision::Approve,
            note: row.arg.clone(),
        },
        "withdraw-decline" => Command::ResolveWithdrawal {
            request: row.request(line)?,
            decision: WithdrawalDecision::Decline,
            note: row.arg.clone(),
        },
        "reassign" => Command::Reassign {
            task: row.task(line)?,
            vendor: row.vendor(line)?,
        },
        other => {
            return Err(CsvError::UnrecognizedOp {
                line,
                op: other.to_string(),
            });
        }
    };
    Ok(command)
}

/// Write wallet summaries to stdout in csv format, ordered by vendor id
pub fn write_wallets<'a>(wallets: impl IntoIterator<Item = &'a VendorWallet>) {
    let stdout = io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());

    let mut wallets: Vec<_> = wallets.into_iter().collect();
    wallets.sort_by_key(|w| w.vendor());

    for wallet in wallets {
        let row = OutputRow {
            vendor: wallet.vendor(),
            balance: wallet.balance().to_string(),
            security_deposit: wallet.security_deposit().to_string(),
            withdrawable: wallet.withdrawable().to_string(),
            mandatory_deposit: wallet.has_mandatory_deposit(),
        };
        writer.serialize(&row).expect("failed to write csv row");
    }

    writer.flush().expect("failed to flush csv writer");
}
