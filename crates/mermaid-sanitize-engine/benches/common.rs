// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_flowchart(nodes: usize) -> String {
    let mut content = String::from("flowchart TD\n");

    for i in 0..nodes {
        content.push_str(&format!(
            "    n{i}[Step {i} \u{1F680} (build)] --> d{i}{{Ready {i}? \u{2705}}}\n"
        ));
        content.push_str(&format!("    d{i} -->|yes| q{i}[\"Already quoted\"]\n"));
    }

    content
}
