//! Table of every symbol this library exports to generated code.
//!
//! The table is for tooling and tests; generated code links against the
//! symbols directly.

use core::ffi::c_void;

/// One exported symbol and the address it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Export {
    pub name: &'static str,
    pub address: *const c_void,
}

/// Push an [`Export`] for each named function.
macro_rules! export_symbols {
    ($table:ident; $($name:ident),* $(,)?) => {
        $(
            $table.push($crate::exports::Export {
                name: stringify!($name),
                address: $name as *const core::ffi::c_void,
            });
        )*
    };
}
pub(crate) use export_symbols;

/// Every exported symbol, grouped by family.
pub fn exports() -> Vec<Export> {
    let mut table = Vec::with_capacity(256);
    crate::ops::register_operators(&mut table);
    crate::cast::register_casts(&mut table);
    crate::io::register_io(&mut table);
    crate::memory::register_memory(&mut table);
    crate::process::register_process(&mut table);
    table
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_exports_are_unique_and_resolved() {
        let table = exports();
        let names: HashSet<_> = table.iter().map(|export| export.name).collect();
        assert_eq!(names.len(), table.len());
        assert!(table.iter().all(|export| !export.address.is_null()));
        assert!(table.iter().all(|export| export.name.starts_with("__ext_")));
    }

    #[test]
    fn test_export_address_matches_function() {
        let table = exports();
        let add = table
            .iter()
            .find(|export| export.name == "__ext_add_i32")
            .expect("__ext_add_i32 is exported");
        assert_eq!(add.address, crate::ops::__ext_add_i32 as *const c_void);
    }
}
