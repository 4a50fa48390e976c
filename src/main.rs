fn main() -> anyhow::Result<()> {
    property_explorer::cli::run()
}
