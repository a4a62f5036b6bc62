//! Parsing OMFL text and reading typed values.
//!
//! Run with: cargo run --example basic

use omfl::parse;
use std::error::Error;

const CONFIG: &str = r#"
# gateway configuration
name = "gateway"
workers = 8

[server.http]
port = 8080
hosts = ["a.local", "b.local"]
timeout = 2.5
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = parse(CONFIG);
    if !doc.is_valid() {
        eprint!("{}", doc.errors());
        return Err("configuration is invalid".into());
    }

    // Strict extraction fails on a kind mismatch
    let name = doc.get("name").as_str()?;
    let port = doc.get("server.http.port").as_int()?;
    println!("{} listens on port {}", name, port);

    // Defaults cover missing keys
    let retries = doc.get("server.http.retries").as_int_or(3);
    println!("retries: {}", retries);

    for host in doc.get("server.http.hosts").as_array()? {
        println!("host: {}", host);
    }

    match doc.get("workers").as_float() {
        Ok(workers) => println!("workers: {}", workers),
        Err(err) => println!("✓ {}", err),
    }

    println!("\nAs JSON:\n{}", serde_json::to_string_pretty(&doc)?);

    Ok(())
}
