//! Example: Render the welcome banner to HTML

use auc_fragments::Welcome;
use auc_markup::outer_html;
use auc_style::ScopedClasses;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Stand-in for the manifest the CSS build writes next to the bundle
    let classes = ScopedClasses::from_json(r#"{ "welcome": "welcome_a1b2" }"#)?;

    let banner = Welcome::new(&classes);
    println!("{}", outer_html(&banner.render()));

    Ok(())
}
