//! Walking sections in definition order and reporting every syntax error.
//!
//! Run with: cargo run --example sections

use omfl::{parse_with_options, Node, ParseOptions};

const CONFIG: &str = r#"
[db.primary]
host = "10.0.0.1"
port = 5432

[db.replica]
host = "10.0.0.2"
port = 5432 5433

[cache]
ttl = 1.5e3
size = 64

[db.primary]
pool = 16
"#;

fn print_section(name: &str, node: Node<'_>, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Section(section) => {
            println!("{}[{}] ({} entries)", indent, name, section.len());
            for (child, node) in section.iter() {
                print_section(child, node, depth + 1);
            }
        }
        Node::Value(value) => println!("{}{} = {}", indent, name, value),
    }
}

fn main() {
    let options = ParseOptions::collect_all().with_source_name("sections.omfl");
    let doc = parse_with_options(CONFIG, options);

    print_section("<root>", doc.root(), 0);

    if !doc.is_valid() {
        println!(
            "\n{} syntax error(s) in {}:",
            doc.diagnostics().len(),
            doc.source_name().unwrap_or("input")
        );
        for diagnostic in doc.diagnostics() {
            println!("  {}", diagnostic);
        }
    }
}
