use skalable_web::WebApp;

fn main() -> anyhow::Result<()> {
    WebApp::new().launch()?;
    Ok(())
}
