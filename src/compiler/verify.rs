//! Round-trips emitted IR through LLVM.
//!
//! Only built with the `verify` feature, since it needs a system LLVM 14.

use inkwell::{context::Context, memory_buffer::MemoryBuffer};

use crate::errors::errors::{Error, ErrorImpl};

/// Parses `ir` as an LLVM module and runs the module verifier on it.
pub fn verify_ir(ir: &str) -> Result<(), Error> {
    let context = Context::create();
    let buffer = MemoryBuffer::create_from_memory_range_copy(ir.as_bytes(), "microc");

    let module = context
        .create_module_from_ir(buffer)
        .map_err(|message| verification_error(message.to_string()))?;

    module
        .verify()
        .map_err(|message| verification_error(message.to_string()))
}

fn verification_error(message: String) -> Error {
    Error::detached(ErrorImpl::Verification { message })
}
