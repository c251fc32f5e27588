pub mod asm_writer;
pub mod commands;
pub mod operation;
pub mod segment_type;
pub mod vm_translator;
