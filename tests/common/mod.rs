#![allow(dead_code)]

pub fn fixture(name: &str) -> String {
    let base = std::env::current_dir().unwrap();
    let path = base.join("tests").join("fixtures").join(name);

    path.display().to_string()
}

/// Unique scratch path under the system temp dir.
pub fn temp_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("form_autofill_{}_{}", std::process::id(), name))
        .display()
        .to_string()
}
