//! In-memory transaction backing [`ScriptContext`] for the integration tests.

#![allow(dead_code)]

use ckb_gen_types::{
    packed::{BytesOpt, WitnessArgs},
    prelude::*,
};
use vote_tally::{handlers::TypeId, GroupSide, ScriptContext, SysFailure};

pub const TYPE_ID: [u8; 32] = [0x42; 32];

/// A transaction with one script group, described by raw bytes.
#[derive(Debug, Clone)]
pub struct MockTx {
    pub args: Vec<u8>,
    pub inputs: Vec<Vec<u8>>,
    pub outputs: Vec<Vec<u8>>,
    pub witnesses: Vec<Vec<u8>>,
    /// Whether the ledger's type-id rule accepts `args` for this transaction.
    pub identity_bound: bool,
    /// Returned by every cell data load in place of the cell.
    pub cell_data_failure: Option<SysFailure>,
    /// Returned by every witness load in place of the witness.
    pub witness_failure: Option<SysFailure>,
}

impl MockTx {
    /// One vote carried by a well-formed transaction.
    pub fn vote(input: &[u32], output: &[u32], intent: Option<&[u8]>) -> Self {
        Self {
            args: TYPE_ID.to_vec(),
            inputs: vec![counters(input)],
            outputs: vec![counters(output)],
            witnesses: vec![witness_args(Some(&[0u8; 65]), intent, None)],
            identity_bound: true,
            cell_data_failure: None,
            witness_failure: None,
        }
    }
}

impl ScriptContext for MockTx {
    fn load_script_args(&self, buf: &mut [u8]) -> Result<usize, SysFailure> {
        copy_item(Some(&self.args), buf)
    }

    fn validate_identity(&self, type_id: &TypeId) -> Result<(), SysFailure> {
        if self.identity_bound && self.args.starts_with(&type_id.0) {
            Ok(())
        } else {
            Err(SysFailure::Unknown(40))
        }
    }

    fn load_cell_data(
        &self,
        side: GroupSide,
        index: usize,
        buf: &mut [u8],
    ) -> Result<usize, SysFailure> {
        if let Some(failure) = self.cell_data_failure {
            return Err(failure);
        }
        let cells = match side {
            GroupSide::Input => &self.inputs,
            GroupSide::Output => &self.outputs,
        };
        copy_item(cells.get(index), buf)
    }

    fn load_witness(&self, index: usize, buf: &mut [u8]) -> Result<usize, SysFailure> {
        if let Some(failure) = self.witness_failure {
            return Err(failure);
        }
        copy_item(self.witnesses.get(index), buf)
    }
}

fn copy_item(item: Option<&Vec<u8>>, buf: &mut [u8]) -> Result<usize, SysFailure> {
    let item = item.ok_or(SysFailure::IndexOutOfBound)?;
    let copied = item.len().min(buf.len());
    buf[..copied].copy_from_slice(&item[..copied]);
    if item.len() > buf.len() {
        return Err(SysFailure::LengthNotEnough(item.len()));
    }
    Ok(item.len())
}

/// Cell data layout: packed little-endian u32 counters.
pub fn counters(counts: &[u32]) -> Vec<u8> {
    counts.iter().flat_map(|count| count.to_le_bytes()).collect()
}

fn bytes_opt(field: Option<&[u8]>) -> BytesOpt {
    BytesOpt::new_builder()
        .set(field.map(|bytes| bytes.pack()))
        .build()
}

/// Serialized `WitnessArgs` built with the schema's own builder.
pub fn witness_args(
    lock: Option<&[u8]>,
    input_type: Option<&[u8]>,
    output_type: Option<&[u8]>,
) -> Vec<u8> {
    WitnessArgs::new_builder()
        .lock(bytes_opt(lock))
        .input_type(bytes_opt(input_type))
        .output_type(bytes_opt(output_type))
        .build()
        .as_slice()
        .to_vec()
}
