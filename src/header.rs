//! C header rendering for the runtime surface.

use fatlang_abi::{Family, Kind, Symbol, catalogue};

pub const INCLUDE_GUARD: &str = "FATLANG_RUNTIME_H";

/// Selects symbols by family and/or by a kind they involve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymbolFilter {
    pub family: Option<Family>,
    pub kind: Option<Kind>,
}

impl SymbolFilter {
    pub fn matches(&self, symbol: &Symbol) -> bool {
        self.family.is_none_or(|family| symbol.family() == family)
            && self.kind.is_none_or(|kind| symbol.involves(kind))
    }
}

/// The C prototype of `symbol`, without the trailing `;`.
pub fn prototype(symbol: &Symbol) -> String {
    let prototype = symbol.signature().prototype(&symbol.name());
    match symbol {
        Symbol::Exit => format!("_Noreturn {prototype}"),
        _ => prototype,
    }
}

/// Prototypes of every catalogued symbol accepted by `filter`, in catalogue order.
pub fn prototypes(filter: &SymbolFilter) -> Vec<String> {
    catalogue()
        .iter()
        .filter(|symbol| filter.matches(symbol))
        .map(prototype)
        .collect()
}

fn render_family(out: &mut String, family: Family) {
    out.push_str(&format!("/* {family} */\n"));
    let filter = SymbolFilter {
        family: Some(family),
        kind: None,
    };
    for line in prototypes(&filter) {
        out.push_str(&line);
        out.push_str(";\n");
    }
}

/// Renders the complete header generated programs are compiled against.
pub fn render_header() -> String {
    let mut out = String::new();
    out.push_str("/* Generated by `fatlang header`. Do not edit. */\n");
    out.push_str(&format!("#ifndef {INCLUDE_GUARD}\n#define {INCLUDE_GUARD}\n\n"));
    out.push_str("#include <stdbool.h>\n#include <stddef.h>\n#include <stdint.h>\n\n");

    // `char` and `bool` are already C type names.
    for kind in Kind::ALL {
        if !matches!(kind, Kind::Char | Kind::Bool) {
            out.push_str(&format!("typedef {} {};\n", kind.c_type(), kind.name()));
        }
    }

    out.push_str("\nstruct __c_char_arr {\n    void* ptr;\n    size_t len;\n};\n");

    for family in Family::ALL {
        out.push('\n');
        render_family(&mut out, family);
    }

    out.push_str(&format!("\n#endif /* {INCLUDE_GUARD} */\n"));
    out
}
