//! Process termination.

use crate::exports::export_symbols;
use crate::io::flush_stdout;

/// Terminates the process with `code`. Outstanding allocations are left to
/// the operating system.
#[unsafe(no_mangle)]
pub extern "C" fn __ext_exit(code: i32) -> ! {
    tracing::debug!(code, "exit");
    flush_stdout();
    std::process::exit(code)
}

pub(crate) fn register_process(table: &mut Vec<crate::Export>) {
    export_symbols!(table; __ext_exit);
}
