use anyhow::Context;
use dioxus::logger::tracing::Level;

fn main() -> anyhow::Result<()> {
    dioxus::logger::init(Level::INFO).context("failed to initialize logger")?;
    dioxus::launch(storyview::App);
    Ok(())
}
