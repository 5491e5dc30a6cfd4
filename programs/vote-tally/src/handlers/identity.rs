use crate::{
    constants::TYPE_ID_LEN,
    context::{ScriptContext, SysFailure},
    error::{ErrorCode, Result},
};

/// Identifier shared by every generation of the vote cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeId(pub [u8; TYPE_ID_LEN]);

/// Reads the type id from the script args and checks it against the
/// transaction.
///
/// The type id occupies the first 32 bytes of the args; trailing bytes are
/// ignored. Binding rules (a cell may evolve under its id but never be
/// duplicated) belong to the ledger's type-id capability, which is only
/// consulted here.
pub fn verify_type_id<C: ScriptContext>(ctx: &C) -> Result<TypeId> {
    let mut args = [0u8; TYPE_ID_LEN];
    match ctx.load_script_args(&mut args) {
        Ok(TYPE_ID_LEN) | Err(SysFailure::LengthNotEnough(_)) => {}
        Ok(_) | Err(_) => return Err(ErrorCode::Identity),
    }

    let type_id = TypeId(args);
    ctx.validate_identity(&type_id).map_err(|_| ErrorCode::Identity)?;
    Ok(type_id)
}
