//! Example: build a mold into a fresh document and print its markup
//!
//! Run with `RUST_LOG=jello_mold=debug` to see the planning logs.

use jello_dom::DomTree;
use jello_html::HtmlSerializer;
use jello_mold::{MoldConfig, TextAlign, build_mold};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = DomTree::new();
    let body = tree.create_element("body");
    tree.append_child(tree.root(), body)?;

    let config = MoldConfig::new()
        .align(TextAlign::Left)
        .min_width("32em")
        .max_width("64em");
    let mold = build_mold(&mut tree, body, &config)?;

    let heading = tree.create_element("h1");
    let text = tree.create_text("Hello World. This headline never shrinks below 32em");
    tree.append_child(heading, text)?;
    tree.append_child(mold.content(), heading)?;

    println!("jello-mold v{}", jello_mold::VERSION);
    println!("{}", HtmlSerializer::pretty().serialize_outer(&tree, body));
    Ok(())
}
