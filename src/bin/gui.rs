fn main() -> Result<(), Box<dyn std::error::Error>> {
    sdf_explorer::init_tracing()?;
    sdf_explorer::run_viewer()?;

    Ok(())
}
