pub fn run() -> anyhow::Result<()> {
    println!("skillsearch {}", env!("CARGO_PKG_VERSION"));
    println!("BM25 ranking for CSV knowledge bases");
    Ok(())
}
