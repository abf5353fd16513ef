//! Interprets RPC preflight failures into readable instruction error messages naming the failing
//! step of the transaction.

use std::fmt::Display;

use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    rpc_request::{
        RpcError::RpcResponseError,
        RpcResponseErrorData,
    },
    rpc_response::RpcSimulateTransactionResult,
};
use solana_instruction::Instruction;
use solana_instruction_error::InstructionError;
use solana_transaction_error::TransactionError;

use crate::{
    fmt_kv,
    program_ids::{
        program_name,
        SPL_ASSOCIATED_TOKEN_ACCOUNT_ID,
        SPL_TOKEN_ID,
        SYSTEM_PROGRAM_ID,
    },
    LogColor,
};

#[derive(Debug)]
pub struct PrettyInstructionError {
    pub instruction_index: u8,
    pub program: String,
    pub instruction: String,
    pub error: InstructionError,
}

impl PrettyInstructionError {
    pub fn new(error: &ClientError, instructions: &[Instruction]) -> Option<Self> {
        match error.kind() {
            ClientErrorKind::RpcError(RpcResponseError {
                data:
                    RpcResponseErrorData::SendTransactionPreflightFailure(
                        RpcSimulateTransactionResult {
                            err: Some(ui_err), ..
                        },
                    ),
                ..
            }) => Self::from_transaction_error(&ui_err.clone().into(), instructions),
            ClientErrorKind::TransactionError(transaction_error) => {
                Self::from_transaction_error(transaction_error, instructions)
            }
            _ => None,
        }
    }

    pub fn from_transaction_error(
        transaction_error: &TransactionError,
        instructions: &[Instruction],
    ) -> Option<Self> {
        let TransactionError::InstructionError(instruction_index, error) = transaction_error else {
            return None;
        };
        let instruction = instructions.get(*instruction_index as usize)?;

        Some(Self {
            instruction_index: *instruction_index,
            program: program_name(&instruction.program_id)
                .map(str::to_string)
                .unwrap_or_else(|| instruction.program_id.to_string()),
            instruction: instruction_name(instruction),
            error: error.clone(),
        })
    }
}

/// Names the instructions the mint-and-fund transaction is built from. Anything else falls back
/// to its raw tag.
pub fn instruction_name(instruction: &Instruction) -> String {
    let data = instruction.data.as_slice();
    let program_id = instruction.program_id;

    if program_id == SYSTEM_PROGRAM_ID {
        match data.get(..4) {
            Some([0, 0, 0, 0]) => "CreateAccount".to_string(),
            Some(tag) => format!("SystemInstruction({})", tag[0]),
            None => "SystemInstruction(?)".to_string(),
        }
    } else if program_id == SPL_TOKEN_ID {
        match data.first() {
            Some(0) => "InitializeMint".to_string(),
            Some(7) => "MintTo".to_string(),
            Some(14) => "MintToChecked".to_string(),
            Some(20) => "InitializeMint2".to_string(),
            Some(tag) => format!("TokenInstruction({tag})"),
            None => "TokenInstruction(?)".to_string(),
        }
    } else if program_id == SPL_ASSOCIATED_TOKEN_ACCOUNT_ID {
        match data.first() {
            None | Some(0) => "CreateAssociatedTokenAccount".to_string(),
            Some(1) => "CreateAssociatedTokenAccountIdempotent".to_string(),
            Some(tag) => format!("AssociatedTokenAccountInstruction({tag})"),
        }
    } else {
        data.first()
            .map_or("Instruction(?)".to_string(), |tag| format!("Instruction({tag})"))
    }
}

impl Display for PrettyInstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!(
            "#{} {} ({}): {}",
            self.instruction_index, self.instruction, self.program, self.error
        );
        let error_message = fmt_kv!("SolanaInstructionError", message, LogColor::Error);
        write!(f, "{error_message}")
    }
}
