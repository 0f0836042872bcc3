pub mod show;
pub mod arith;
pub mod eval;

#[cfg(test)]
pub(crate) fn data(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}
