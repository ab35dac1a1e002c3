//! Package Loader Pattern
//!
//! Three layers each report the package path they were working on. Deeper
//! layers already carry the fact, so outer layers only add their own message,
//! and the top layer pulls the path to the front of the final text.

use error_strata::{fields, ChainBuilder, ErrorNode, Field, FieldAware, FieldValue, StrataResult};

/// Resolver failure that exposes its facts to the layers above it.
#[derive(Debug)]
struct ModuleNotFound {
    fields: Vec<Field>,
}

impl ModuleNotFound {
    fn new(package_path: &str, module: &str) -> Self {
        Self {
            fields: fields![package_path = package_path.to_string(), module = module.to_string()],
        }
    }
}

impl std::fmt::Display for ModuleNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("cannot find module")
    }
}

impl std::error::Error for ModuleNotFound {}

impl FieldAware for ModuleNotFound {
    fn fields(&self) -> &[Field] {
        &self.fields
    }
}

error_strata::impl_into_cause!(ModuleNotFound, field_aware);

fn resolve_module(package_path: &str) -> Result<(), ModuleNotFound> {
    Err(ModuleNotFound::new(package_path, "example.com/m"))
}

fn resolve_import(package_path: &str) -> StrataResult<()> {
    resolve_module(package_path).map_err(|e| {
        ChainBuilder::new("unknown import path")
            .with_field("package_path", package_path.to_string())
            .kind("import")
            .wrap(e)
            .unwrap_or_else(ErrorNode::from)
    })
}

fn load_package(package_path: &str) -> StrataResult<()> {
    resolve_import(package_path).map_err(|e| {
        ChainBuilder::new("can't load package")
            .field(Field::new("package_path", package_path.to_string()).lead())
            .wrap(e)
            .unwrap_or_else(ErrorNode::from)
    })
}

fn main() {
    let package_path = std::env::args().nth(1).unwrap_or_else(|| "p/q".to_string());

    match load_package(&package_path) {
        Ok(()) => println!("✓ package {} loaded", package_path),
        Err(e) => {
            eprintln!("✗ {}", e);

            if let Some(FieldValue::Text(module)) = e.extract_field("module") {
                eprintln!("  missing module: {}", module);
            }
            if e.extract_node(|node| node.kind() == Some("import")).is_some() {
                eprintln!("  failed while resolving imports");
            }

            if std::env::var("DEBUG").is_ok() {
                eprintln!("\nDebug trace (fingerprint {}):", e.fingerprint_hex());
                eprintln!("{:#}", e);
            }

            std::process::exit(1);
        },
    }
}
