//! Shared unit header: package clause plus the module's import block

use crate::features::parsing::domain::Module;

/// `package <name>` followed by every module import
///
/// Unused imports are left for the import formatter to prune.
pub fn build_header(module: &Module) -> String {
    let mut header = format!("package {}\n\n", module.package_name);

    let imports = module.imports();
    if imports.is_empty() {
        return header;
    }

    header.push_str("import (\n");
    for import in imports {
        header.push('\t');
        header.push_str(&import.render());
        header.push('\n');
    }
    header.push_str(")\n\n");
    header
}
