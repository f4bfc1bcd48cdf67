/// Build-time i18n codegen: turns the `_locales/<locale>/messages.json`
/// catalogs into typed accessor functions included by `src/i18n.rs`.
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Deserialize;

const LOCALES_DIR: &str = "_locales";

/// One catalog entry, in the browser extension message format
#[derive(Debug, Deserialize)]
struct Message {
    message: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    placeholders: Option<BTreeMap<String, Placeholder>>,
}

#[derive(Debug, Deserialize)]
struct Placeholder {
    content: String,
    #[serde(default)]
    #[allow(dead_code)]
    example: Option<String>,
}

/// message name -> locale -> catalog entry
type MergedMessages = BTreeMap<String, BTreeMap<String, Message>>;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let merged = merge_locale_catalogs(LOCALES_DIR);
    generate_accessors(&merged, &out_dir);

    println!("cargo:rerun-if-changed={}", LOCALES_DIR);
    for entry in fs::read_dir(LOCALES_DIR).expect("failed to read _locales") {
        let path = entry.expect("failed to read _locales entry").path();
        if path.is_dir() {
            println!("cargo:rerun-if-changed={}", path.join("messages.json").display());
        }
    }
}

/// Load every `<locale>/messages.json` under the source directory and merge
/// the catalogs into a per-message-name record. The parent directory name of
/// each file is its locale code. Messages named `manifest*` are consumed by
/// the browser's manifest substitution, not by code, and are skipped.
fn merge_locale_catalogs(source_dir: &str) -> MergedMessages {
    let mut merged = MergedMessages::new();

    let entries = fs::read_dir(source_dir).expect("failed to read _locales");
    for entry in entries {
        let entry = entry.expect("failed to read _locales entry");
        if !entry.path().is_dir() {
            continue;
        }
        let locale = entry
            .file_name()
            .into_string()
            .expect("locale directory name is not UTF-8");

        let catalog_path = entry.path().join("messages.json");
        let json = fs::read_to_string(&catalog_path)
            .unwrap_or_else(|e| panic!("failed to read {}: {}", catalog_path.display(), e));
        let catalog: BTreeMap<String, Message> = serde_json::from_str(&json)
            .unwrap_or_else(|e| panic!("failed to parse {}: {}", catalog_path.display(), e));

        for (name, message) in catalog {
            if name.starts_with("manifest") {
                continue;
            }
            merged.entry(name).or_default().insert(locale.clone(), message);
        }
    }

    merged
}

/// Emit one `pub fn` per message name, each delegating to the runtime
/// `message()` shim with the arity its placeholders require.
fn generate_accessors(merged: &MergedMessages, out_dir: &str) {
    let path = Path::new(out_dir).join("i18n.rs");
    let mut file = BufWriter::new(fs::File::create(&path).unwrap());

    writeln!(file, "// Generated from {}/*/messages.json. Do not edit.", LOCALES_DIR).unwrap();

    for (name, locales) in merged {
        let arity = locales.values().map(substitution_count).max().unwrap_or(0);
        let args: Vec<String> = (1..=arity).map(|i| format!("substitution_{}", i)).collect();

        writeln!(file).unwrap();
        for (locale, message) in locales {
            writeln!(file, "/// `{}`: {:?}", locale, message.message).unwrap();
            if let Some(description) = &message.description {
                writeln!(file, "///   ({})", description).unwrap();
            }
        }
        let params: Vec<String> = args.iter().map(|a| format!("{}: &str", a)).collect();
        writeln!(file, "pub fn {}({}) -> String {{", snake_case(name), params.join(", ")).unwrap();
        writeln!(file, "    message({:?}, &[{}])", name, args.join(", ")).unwrap();
        writeln!(file, "}}").unwrap();
    }
}

/// Highest `$N` substitution index referenced by the entry's placeholders
fn substitution_count(message: &Message) -> usize {
    let Some(placeholders) = &message.placeholders else {
        return 0;
    };

    placeholders
        .values()
        .flat_map(|placeholder| substitution_indices(&placeholder.content))
        .max()
        .unwrap_or(0)
}

/// Parse every `$N` reference out of a placeholder content string
fn substitution_indices(content: &str) -> Vec<usize> {
    let mut indices = Vec::new();
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            continue;
        }
        let mut digits = String::new();
        while let Some(digit) = chars.peek().filter(|c| c.is_ascii_digit()) {
            digits.push(*digit);
            chars.next();
        }
        if let Ok(index) = digits.parse::<usize>() {
            indices.push(index);
        }
    }

    indices
}

fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
