//! Homepage rendering example.
//!
//! Run with: `cargo run --example render_homepage`

use trustcard_homepage::{config::SiteConfig, render_homepage};

fn main() {
    let site = SiteConfig::default();

    // Render to HTML
    let html = render_homepage(&site);

    // Write to file
    let output_path = "homepage.html";
    std::fs::write(output_path, &html).expect("Failed to write homepage");

    println!("Homepage written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
